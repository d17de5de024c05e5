//! `appcfg status-bar`

use std::path::Path;

use appcfg_android::{LightStatusBarRule, apply_status_bar, get_status_bar_color, get_status_bar_style};
use appcfg_config::{FileConfigLoader, GetConfigOptions};
use appcfg_fs::ProjectPath;
use colored::Colorize;

use crate::error::Result;

/// Apply `androidStatusBar` to the project's Android resources.
pub fn run_status_bar(path: &Path, rule: LightStatusBarRule, dry_run: bool) -> Result<()> {
    let root = ProjectPath::new(path);
    let config = FileConfigLoader::new().load(&root, GetConfigOptions::private())?;

    let report = apply_status_bar(&root, &config.exp, rule, dry_run)?;

    let color = get_status_bar_color(&config.exp)
        .filter(|hex| !hex.is_empty())
        .unwrap_or("translucent");
    println!(
        "{} status bar: {} ({})",
        "=>".blue().bold(),
        color.cyan(),
        get_status_bar_style(&config.exp)
    );

    if !report.changed() {
        println!("   {}", "Already up to date".dimmed());
        return Ok(());
    }

    for (file, changed) in [("styles.xml", report.styles_changed), ("colors.xml", report.colors_changed)] {
        if !changed {
            continue;
        }
        if dry_run {
            println!("   {} {} {}", "~".yellow(), file, "(dry run)".dimmed());
        } else {
            println!("   {} {}", "+".green(), file);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appcfg_test_utils::TestProject;
    use serde_json::json;

    #[test]
    fn test_status_bar_writes_resources() {
        let project = TestProject::with_expo_config(json!({
            "androidStatusBar": { "backgroundColor": "#654321" }
        }));

        run_status_bar(project.root(), LightStatusBarRule::default(), false).unwrap();

        project.assert_file_contains(
            "android/app/src/main/res/values/colors.xml",
            "<color name=\"colorPrimaryDark\">#654321</color>",
        );
    }

    #[test]
    fn test_status_bar_dry_run() {
        let project = TestProject::with_expo_config(json!({}));

        run_status_bar(project.root(), LightStatusBarRule::default(), true).unwrap();

        project.assert_file_not_exists("android/app/src/main/res/values/styles.xml");
    }

    #[test]
    fn test_status_bar_without_package_json_fails() {
        let project = TestProject::new();
        assert!(run_status_bar(project.root(), LightStatusBarRule::default(), false).is_err());
    }
}
