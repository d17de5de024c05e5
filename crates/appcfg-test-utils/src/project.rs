//! [`TestProject`] builder for app config test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Path of the Android values directory relative to the project root.
pub const ANDROID_VALUES_DIR: &str = "android/app/src/main/res/values";

/// A temporary mobile project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use appcfg_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new()
///     .with_package_json(json!({ "name": "demo", "version": "1.0.0" }))
///     .with_app_json(json!({ "expo": { "sdkVersion": "49.0.0" } }));
/// project.assert_file_exists("app.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// A project with a minimal `package.json` and the given `expo` config.
    pub fn with_expo_config(expo: Value) -> Self {
        Self::new()
            .with_package_json(serde_json::json!({ "name": "test-app", "version": "1.0.0" }))
            .with_app_json(serde_json::json!({ "expo": expo }))
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `package.json`.
    pub fn with_package_json(self, value: Value) -> Self {
        self.write_json("package.json", &value);
        self
    }

    /// Write `app.json`.
    pub fn with_app_json(self, value: Value) -> Self {
        self.write_json("app.json", &value);
        self
    }

    /// Install a fake `expo` package with the given version.
    pub fn with_expo_package(self, version: &str) -> Self {
        self.write_json(
            "node_modules/expo/package.json",
            &serde_json::json!({ "name": "expo", "version": version }),
        );
        self
    }

    /// Write a locale JSON file at `relative`.
    pub fn with_locale_file(self, relative: &str, value: Value) -> Self {
        self.write_json(relative, &value);
        self
    }

    /// Write `styles.xml` into the Android values directory.
    pub fn with_android_styles(self, xml: &str) -> Self {
        self.write_file(&format!("{ANDROID_VALUES_DIR}/styles.xml"), xml);
        self
    }

    /// Write `colors.xml` into the Android values directory.
    pub fn with_android_colors(self, xml: &str) -> Self {
        self.write_file(&format!("{ANDROID_VALUES_DIR}/colors.xml"), xml);
        self
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Write `value` as pretty JSON to `relative`.
    pub fn write_json(&self, relative: &str, value: &Value) {
        self.write_file(relative, &serde_json::to_string_pretty(value).unwrap());
    }

    /// Read a project file as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(!path.exists(), "Expected file NOT to exist: {}", path.display());
    }

    /// Assert that the file at `relative` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            relative,
            content,
            file_content
        );
    }
}
