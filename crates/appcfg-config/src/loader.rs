//! Loading the private and public views of a project's config
//!
//! A project is described by two files at its root:
//!
//! ```text
//! <root>/
//!   package.json    required
//!   app.json        optional; either `{ "expo": { ... } }` or the bare config
//! ```
//!
//! Missing identity fields are filled from `package.json`, and the SDK
//! version is inferred from the installed `expo` package unless the caller
//! opts out.

use std::path::Path;
use std::sync::LazyLock;

use appcfg_fs::{ProjectFile, ProjectPath, io};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;

use crate::public::make_public;
use crate::sdk::{infer_sdk_version, validate_sdk_version};
use crate::{AppConfig, Error, PackageJson, ProjectConfig, Result};

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Options for [`ConfigLoader::get_config`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetConfigOptions {
    /// Do not fail when no SDK version can be determined.
    pub skip_sdk_version_requirement: bool,
    /// Return the public projection (no hooks, no platform secrets).
    pub is_public_config: bool,
}

impl GetConfigOptions {
    /// The private view, without requiring an SDK version.
    pub fn private() -> Self {
        Self {
            skip_sdk_version_requirement: true,
            is_public_config: false,
        }
    }

    /// The public view.
    pub fn public(skip_sdk_version_requirement: bool) -> Self {
        Self {
            skip_sdk_version_requirement,
            is_public_config: true,
        }
    }
}

/// Loads a project's config.
#[async_trait]
pub trait ConfigLoader: Send + Sync {
    async fn get_config(&self, root: &ProjectPath, options: GetConfigOptions)
    -> Result<ProjectConfig>;
}

/// Loads config from `app.json` and `package.json` on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous load; the async trait method delegates here.
    pub fn load(&self, root: &ProjectPath, options: GetConfigOptions) -> Result<ProjectConfig> {
        let pkg_path = root.file(ProjectFile::PackageJson);
        let pkg: PackageJson = match io::read_json_optional(&pkg_path)? {
            Some(pkg) => pkg,
            None => return Err(Error::ConfigNotFound { path: pkg_path }),
        };

        let app_path = root.file(ProjectFile::AppJson);
        let mut exp = match io::read_json_optional::<Value>(&app_path)? {
            Some(raw) => parse_app_json(&app_path, raw)?,
            None => {
                tracing::debug!(path = %app_path.display(), "No app.json, using package.json only");
                AppConfig::default()
            }
        };

        apply_package_defaults(&mut exp, &pkg);

        match exp.sdk_version.as_deref() {
            Some(sdk_version) => validate_sdk_version(&app_path, sdk_version)?,
            None => {
                exp.sdk_version = match infer_sdk_version(root) {
                    Ok(inferred) => inferred,
                    Err(e) if options.skip_sdk_version_requirement => {
                        tracing::warn!("Could not infer SDK version: {}", e);
                        None
                    }
                    Err(e) => return Err(e),
                };
                if exp.sdk_version.is_none() && !options.skip_sdk_version_requirement {
                    return Err(Error::MissingSdkVersion {
                        root: root.root().to_path_buf(),
                    });
                }
            }
        }

        if options.is_public_config {
            exp = make_public(exp);
        }

        tracing::debug!(
            root = %root,
            public = options.is_public_config,
            sdk_version = exp.sdk_version.as_deref().unwrap_or("<none>"),
            "Loaded project config"
        );

        Ok(ProjectConfig { exp, pkg })
    }
}

#[async_trait]
impl ConfigLoader for FileConfigLoader {
    async fn get_config(
        &self,
        root: &ProjectPath,
        options: GetConfigOptions,
    ) -> Result<ProjectConfig> {
        self.load(root, options)
    }
}

/// Unwrap the `expo` key if present and parse the config object.
fn parse_app_json(path: &Path, raw: Value) -> Result<AppConfig> {
    let Value::Object(mut root) = raw else {
        return Err(Error::invalid_config(path, "root must be an object"));
    };

    let config = match root.remove("expo") {
        Some(Value::Object(expo)) => expo,
        Some(_) => return Err(Error::invalid_config(path, "`expo` must be an object")),
        None => root,
    };

    AppConfig::from_value(Value::Object(config))
        .map_err(|e| Error::invalid_config(path, e.to_string()))
}

/// Fill identity fields missing from the app config.
fn apply_package_defaults(exp: &mut AppConfig, pkg: &PackageJson) {
    if exp.name.is_none() {
        exp.name = pkg.name.clone();
    }
    if exp.slug.is_none() {
        exp.slug = exp.name.as_deref().map(slugify);
    }
    if exp.version.is_none() {
        exp.version = Some(pkg.version.clone().unwrap_or_else(|| "1.0.0".to_string()));
    }
    if exp.description.is_none() {
        exp.description = pkg.description.clone();
    }
}

/// Lowercase, with runs of non-alphanumerics collapsed to single dashes.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("My App", "my-app")]
    #[case("  Hello, World!  ", "hello-world")]
    #[case("already-slugged", "already-slugged")]
    #[case("Émoji 🚀 App", "moji-app")]
    fn test_slugify(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn test_parse_app_json_unwraps_expo_key() {
        let exp = parse_app_json(Path::new("app.json"), json!({ "expo": { "name": "foo" } }))
            .unwrap();
        assert_eq!(exp.name.as_deref(), Some("foo"));
    }

    #[test]
    fn test_parse_app_json_accepts_bare_config() {
        let exp = parse_app_json(Path::new("app.json"), json!({ "name": "foo" })).unwrap();
        assert_eq!(exp.name.as_deref(), Some("foo"));
    }

    #[test]
    fn test_parse_app_json_rejects_non_object() {
        let err = parse_app_json(Path::new("app.json"), json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_package_defaults_do_not_override() {
        let mut exp = AppConfig {
            name: Some("From App".into()),
            ..Default::default()
        };
        let pkg = PackageJson {
            name: Some("from-pkg".into()),
            version: Some("2.0.0".into()),
            ..Default::default()
        };
        apply_package_defaults(&mut exp, &pkg);
        assert_eq!(exp.name.as_deref(), Some("From App"));
        assert_eq!(exp.slug.as_deref(), Some("from-app"));
        assert_eq!(exp.version.as_deref(), Some("2.0.0"));
    }
}
