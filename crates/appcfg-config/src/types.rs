//! Typed view of `app.json` and `package.json`
//!
//! Only the fields the toolchain reasons about are typed. Everything else
//! is kept in `extra` so a config round-trips without losing keys.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Style of the Android status bar icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarStyle {
    /// Light icons on a dark background.
    #[default]
    LightContent,
    /// Dark icons on a light background.
    DarkContent,
}

impl BarStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarStyle::LightContent => "light-content",
            BarStyle::DarkContent => "dark-content",
        }
    }
}

impl FromStr for BarStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light-content" => Ok(BarStyle::LightContent),
            "dark-content" => Ok(BarStyle::DarkContent),
            other => Err(format!(
                "unknown bar style '{other}' (expected 'light-content' or 'dark-content')"
            )),
        }
    }
}

impl fmt::Display for BarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `androidStatusBar` section of the app config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidStatusBar {
    /// Hex color such as `#654321`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Raw `barStyle` value; see [`AndroidStatusBar::bar_style`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_style: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AndroidStatusBar {
    /// The configured bar style.
    ///
    /// Unrecognized values are ignored so that a typo degrades to the
    /// default instead of failing the build.
    pub fn bar_style(&self) -> Option<BarStyle> {
        let raw = self.bar_style.as_deref()?;
        match raw.parse() {
            Ok(style) => Some(style),
            Err(message) => {
                tracing::warn!("Ignoring androidStatusBar.barStyle: {}", message);
                None
            }
        }
    }
}

/// The declarative app descriptor (the `expo` object of `app.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// SDK-version addressing; mutually exclusive with `runtime_version`
    /// in a published manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<String>,

    /// Runtime-version addressing; a string or a policy object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_status_bar: Option<AndroidStatusBar>,

    /// Publish hooks; only present in the private view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Value>,

    /// Locale tag to file reference, or to resolved locale JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<BTreeMap<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppConfig {
    /// Parse a config from a JSON value.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Serialize back to a JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Whether `runtimeVersion` is set to a truthy value.
    ///
    /// `false`, `0`, and the empty string count as unset.
    pub fn has_runtime_version(&self) -> bool {
        self.runtime_version.as_ref().is_some_and(is_truthy)
    }

    /// Copy of this config addressed by runtime version only.
    pub fn without_sdk_version(&self) -> Self {
        Self {
            sdk_version: None,
            ..self.clone()
        }
    }
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The subset of `package.json` the toolchain uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A loaded project: app config plus package manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub exp: AppConfig,
    pub pkg: PackageJson,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_round_trip() {
        let raw = json!({
            "name": "foo",
            "slug": "bar",
            "orientation": "portrait",
            "android": { "package": "com.example.foo" }
        });
        let config = AppConfig::from_value(raw.clone()).unwrap();
        assert_eq!(config.extra["orientation"], "portrait");
        assert_eq!(config.to_value().unwrap(), raw);
    }

    #[test]
    fn test_bar_style_parses_known_values() {
        let bar = AndroidStatusBar {
            bar_style: Some("dark-content".into()),
            ..Default::default()
        };
        assert_eq!(bar.bar_style(), Some(BarStyle::DarkContent));
    }

    #[test]
    fn test_bar_style_ignores_unknown_values() {
        let bar = AndroidStatusBar {
            bar_style: Some("purple".into()),
            ..Default::default()
        };
        assert_eq!(bar.bar_style(), None);
    }

    #[test]
    fn test_runtime_version_truthiness() {
        let mut config = AppConfig::default();
        assert!(!config.has_runtime_version());

        config.runtime_version = Some(json!(""));
        assert!(!config.has_runtime_version());

        config.runtime_version = Some(json!("1.0.0"));
        assert!(config.has_runtime_version());

        config.runtime_version = Some(json!({ "policy": "sdkVersion" }));
        assert!(config.has_runtime_version());
    }

    #[test]
    fn test_without_sdk_version_clears_only_sdk() {
        let config = AppConfig {
            sdk_version: Some("49.0.0".into()),
            runtime_version: Some(json!("1.0.0")),
            ..Default::default()
        };
        let xor = config.without_sdk_version();
        assert_eq!(xor.sdk_version, None);
        assert_eq!(xor.runtime_version, Some(json!("1.0.0")));
    }
}
