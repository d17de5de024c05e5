//! Tests for applying the status bar config to files on disk

use appcfg_android::{AndroidResourcePaths, LightStatusBarRule, StyleParent, StylesDocument, apply_status_bar};
use appcfg_config::AppConfig;
use appcfg_fs::ProjectPath;
use appcfg_test_utils::TestProject;
use appcfg_test_utils::project::ANDROID_VALUES_DIR;
use serde_json::json;

const THEME: StyleParent = StyleParent::app_theme_light_no_action_bar();

fn styles_path() -> String {
    format!("{ANDROID_VALUES_DIR}/styles.xml")
}

fn colors_path() -> String {
    format!("{ANDROID_VALUES_DIR}/colors.xml")
}

#[test]
fn test_resource_paths() {
    let root = ProjectPath::new("/nonexistent/app");
    let paths = AndroidResourcePaths::new(&root);
    assert!(paths.styles.ends_with("android/app/src/main/res/values/styles.xml"));
    assert!(paths.colors.ends_with("android/app/src/main/res/values/colors.xml"));
}

#[test]
fn test_creates_missing_resource_files() {
    let project = TestProject::new();
    let config = AppConfig::from_value(json!({
        "androidStatusBar": { "backgroundColor": "#654321", "barStyle": "dark-content" }
    }))
    .unwrap();

    let report = apply_status_bar(
        &ProjectPath::new(project.root()),
        &config,
        LightStatusBarRule::default(),
        false,
    )
    .unwrap();

    assert!(report.written);
    project.assert_file_contains(&styles_path(), "<item name=\"colorPrimaryDark\">@color/colorPrimaryDark</item>");
    project.assert_file_contains(&styles_path(), "<item name=\"android:windowLightStatusBar\">true</item>");
    project.assert_file_contains(&colors_path(), "<color name=\"colorPrimaryDark\">#654321</color>");
}

#[test]
fn test_preserves_existing_theme_items() {
    let project = TestProject::new()
        .with_android_styles(
            r#"<resources>
  <style name="AppTheme" parent="Theme.AppCompat.Light.NoActionBar">
    <item name="android:textColor">#000000</item>
  </style>
</resources>"#,
        )
        .with_android_colors("<resources><color name=\"colorPrimary\">#023c69</color></resources>");

    apply_status_bar(
        &ProjectPath::new(project.root()),
        &AppConfig::default(),
        LightStatusBarRule::default(),
        false,
    )
    .unwrap();

    let styles = StylesDocument::parse(&project.read(&styles_path())).unwrap();
    let theme = styles.group_as_map(&THEME);
    assert_eq!(theme["android:textColor"], "#000000");
    assert_eq!(theme["android:windowTranslucentStatus"], "true");
    project.assert_file_contains(&colors_path(), "#023c69");
}

#[test]
fn test_second_run_changes_nothing() {
    let project = TestProject::new();
    let root = ProjectPath::new(project.root());
    let config = AppConfig::from_value(json!({
        "androidStatusBar": { "backgroundColor": "#101010" }
    }))
    .unwrap();

    let first = apply_status_bar(&root, &config, LightStatusBarRule::default(), false).unwrap();
    let second = apply_status_bar(&root, &config, LightStatusBarRule::default(), false).unwrap();

    assert!(first.changed());
    assert!(!second.changed());
    assert!(!second.written);
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = TestProject::new();
    let config = AppConfig::default();

    let report = apply_status_bar(
        &ProjectPath::new(project.root()),
        &config,
        LightStatusBarRule::default(),
        true,
    )
    .unwrap();

    assert!(report.styles_changed);
    assert!(!report.colors_changed);
    assert!(!report.written);
    project.assert_file_not_exists(&styles_path());
    project.assert_file_not_exists(&colors_path());
}

#[test]
fn test_malformed_styles_is_an_error() {
    let project = TestProject::new().with_android_styles("<resources><style>");

    let result = apply_status_bar(
        &ProjectPath::new(project.root()),
        &AppConfig::default(),
        LightStatusBarRule::default(),
        false,
    );

    assert!(result.is_err());
}

#[test]
fn test_unrelated_resources_are_kept_on_disk() {
    let project = TestProject::new()
        .with_android_styles(
            r#"<resources>
  <!-- Base application theme. -->
  <dimen name="pad">8dp</dimen>
  <style name="AppTheme" parent="Theme.AppCompat.Light.NoActionBar">
    <item name="android:textColor">#000000</item>
  </style>
</resources>"#,
        )
        .with_android_colors(
            r#"<resources>
  <color name="splashscreen_background">#FFFFFF</color>
  <integer name="fade_ms">300</integer>
</resources>"#,
        );
    let config = AppConfig::from_value(json!({
        "androidStatusBar": { "backgroundColor": "#023c69" }
    }))
    .unwrap();

    let report = apply_status_bar(
        &ProjectPath::new(project.root()),
        &config,
        LightStatusBarRule::default(),
        false,
    )
    .unwrap();

    assert!(report.written);
    project.assert_file_contains(&styles_path(), "<!-- Base application theme. -->");
    project.assert_file_contains(&styles_path(), "<dimen name=\"pad\">8dp</dimen>");
    project.assert_file_contains(&colors_path(), "<integer name=\"fade_ms\">300</integer>");
    project.assert_file_contains(&colors_path(), "<color name=\"splashscreen_background\">#FFFFFF</color>");
    project.assert_file_contains(&colors_path(), "<color name=\"colorPrimaryDark\">#023c69</color>");
}

#[test]
fn test_empty_background_color_writes_no_color() {
    let project = TestProject::new();
    let config = AppConfig::from_value(json!({
        "androidStatusBar": { "backgroundColor": "" }
    }))
    .unwrap();

    apply_status_bar(
        &ProjectPath::new(project.root()),
        &config,
        LightStatusBarRule::default(),
        false,
    )
    .unwrap();

    project.assert_file_contains(&styles_path(), "<item name=\"android:windowTranslucentStatus\">true</item>");
    project.assert_file_not_exists(&colors_path());
}
