//! End-to-end integration test for the app config toolchain
//!
//! One project goes through the whole flow: config loading -> status bar
//! resources -> publish manifest.

use appcfg_android::{LightStatusBarRule, StyleParent, StylesDocument, apply_status_bar};
use appcfg_config::{FileConfigLoader, GetConfigOptions, StaticManifestPolicy};
use appcfg_fs::ProjectPath;
use appcfg_publish::{PublishConfigResolver, PublishOptions};
use appcfg_test_utils::TestProject;
use serde_json::json;

const STYLES: &str = "android/app/src/main/res/values/styles.xml";
const COLORS: &str = "android/app/src/main/res/values/colors.xml";

/// A project shaped like a freshly ejected app with a localized name.
fn setup_test_project() -> TestProject {
    TestProject::new()
        .with_package_json(json!({ "name": "My Cool App", "version": "3.1.0" }))
        .with_app_json(json!({
            "expo": {
                "name": "Cool App",
                "androidStatusBar": {
                    "backgroundColor": "#023c69",
                    "barStyle": "dark-content"
                },
                "hooks": { "postPublish": [{ "file": "sentry-expo/upload-sourcemaps" }] },
                "android": { "config": { "googleMaps": { "apiKey": "secret" } } },
                "locales": {
                    "fr": "./locales/fr.json",
                    "de": { "CFBundleDisplayName": "Coole App" }
                }
            }
        }))
        .with_expo_package("50.0.4")
        .with_locale_file("locales/fr.json", json!({ "CFBundleDisplayName": "Appli" }))
        .with_android_styles(
            r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
  <style name="AppTheme" parent="Theme.AppCompat.Light.NoActionBar">
    <item name="android:textColor">#000000</item>
    <item name="android:windowTranslucentStatus">true</item>
  </style>
</resources>"#,
        )
}

#[test]
fn test_load_private_config() {
    let project = setup_test_project();
    let root = ProjectPath::new(project.root());

    let config = FileConfigLoader::new()
        .load(&root, GetConfigOptions::private())
        .unwrap();

    assert_eq!(config.exp.name.as_deref(), Some("Cool App"));
    assert_eq!(config.exp.slug.as_deref(), Some("cool-app"));
    assert_eq!(config.exp.version.as_deref(), Some("3.1.0"));
    assert_eq!(config.exp.sdk_version.as_deref(), Some("50.0.0"));
    assert!(config.exp.hooks.is_some());
}

#[test]
fn test_status_bar_round_trip_on_disk() {
    let project = setup_test_project();
    let root = ProjectPath::new(project.root());
    let config = FileConfigLoader::new()
        .load(&root, GetConfigOptions::private())
        .unwrap();

    let report = apply_status_bar(&root, &config.exp, LightStatusBarRule::DarkContent, false).unwrap();
    assert!(report.written);

    let styles = StylesDocument::parse(&project.read(STYLES)).unwrap();
    let theme = styles.group_as_map(&StyleParent::app_theme_light_no_action_bar());
    assert_eq!(theme.get("android:textColor").map(String::as_str), Some("#000000"));
    assert_eq!(
        theme.get("colorPrimaryDark").map(String::as_str),
        Some("@color/colorPrimaryDark")
    );
    assert_eq!(
        theme.get("android:windowLightStatusBar").map(String::as_str),
        Some("true")
    );
    assert!(!theme.contains_key("android:windowTranslucentStatus"));
    project.assert_file_contains(COLORS, "<color name=\"colorPrimaryDark\">#023c69</color>");

    // a second pass over the written files is a no-op
    let again = apply_status_bar(&root, &config.exp, LightStatusBarRule::DarkContent, false).unwrap();
    assert!(!again.changed());
}

#[tokio::test]
async fn test_publish_manifest_for_project() {
    let project = setup_test_project();
    let root = ProjectPath::new(project.root());

    let mut options = PublishOptions::new();
    let bundle = PublishConfigResolver::new()
        .with_policy(StaticManifestPolicy(false))
        .resolve(&root, &mut options)
        .await
        .unwrap();

    assert_eq!(options.release_channel, Some(json!("default")));
    assert_eq!(bundle.exp.sdk_version.as_deref(), Some("50.0.0"));
    assert_eq!(bundle.exp.runtime_version, None);
    assert_eq!(bundle.exp.hooks, None);
    assert_eq!(bundle.exp.extra["android"], json!({}));
    assert_eq!(
        bundle.hooks,
        Some(json!({ "postPublish": [{ "file": "sentry-expo/upload-sourcemaps" }] }))
    );

    let locales = bundle.exp.locales.unwrap();
    assert_eq!(locales["fr"], json!({ "CFBundleDisplayName": "Appli" }));
    assert_eq!(locales["de"], json!({ "CFBundleDisplayName": "Coole App" }));
}

#[tokio::test]
async fn test_publish_manifest_after_switching_to_runtime_version() {
    let project = setup_test_project();
    let mut app = serde_json::from_str::<serde_json::Value>(&project.read("app.json")).unwrap();
    app["expo"]["runtimeVersion"] = json!("3.1.0");
    let project = project.with_app_json(app);
    let root = ProjectPath::new(project.root());

    let bundle = PublishConfigResolver::new()
        .with_policy(StaticManifestPolicy(false))
        .resolve(&root, &mut PublishOptions::with_release_channel("production"))
        .await
        .unwrap();

    let exp = serde_json::to_value(&bundle.exp).unwrap();
    assert!(exp.get("sdkVersion").is_none());
    assert_eq!(exp["runtimeVersion"], json!("3.1.0"));
}
