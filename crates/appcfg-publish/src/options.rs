//! Publish options

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

pub const DEFAULT_RELEASE_CHANNEL: &str = "default";

/// Options accepted by the publish pipeline.
///
/// Options usually arrive as JSON from another tool, so `releaseChannel` is
/// kept untyped until [`PublishOptions::normalize`] validates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_channel: Option<Value>,
}

impl PublishOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_release_channel(channel: impl Into<String>) -> Self {
        Self {
            release_channel: Some(Value::String(channel.into())),
        }
    }

    /// Validate the release channel and fill in the default.
    ///
    /// A JSON `null` counts as absent; an empty string falls back to the
    /// default channel.
    pub fn normalize(&mut self) -> Result<&str> {
        let channel = match self.release_channel.take() {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => {
                self.release_channel = Some(other);
                return Err(Error::invalid_options("releaseChannel must be a string"));
            }
        };
        let channel = if channel.is_empty() {
            DEFAULT_RELEASE_CHANNEL.to_string()
        } else {
            channel
        };

        let value = self.release_channel.insert(Value::String(channel));
        Ok(value.as_str().unwrap_or(DEFAULT_RELEASE_CHANNEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({}), "default")]
    #[case(json!({ "releaseChannel": null }), "default")]
    #[case(json!({ "releaseChannel": "" }), "default")]
    #[case(json!({ "releaseChannel": "staging" }), "staging")]
    fn test_normalize_accepts(#[case] raw: Value, #[case] expected: &str) {
        let mut options: PublishOptions = serde_json::from_value(raw).unwrap();
        assert_eq!(options.normalize().unwrap(), expected);
        assert_eq!(options.release_channel, Some(json!(expected)));
    }

    #[rstest]
    #[case(json!({ "releaseChannel": 42 }))]
    #[case(json!({ "releaseChannel": ["a"] }))]
    #[case(json!({ "releaseChannel": false }))]
    fn test_normalize_rejects_non_strings(#[case] raw: Value) {
        let mut options: PublishOptions = serde_json::from_value(raw.clone()).unwrap();
        let err = options.normalize().unwrap_err();
        assert_eq!(err.to_string(), "releaseChannel must be a string");
        assert_eq!(options.release_channel.as_ref(), raw.get("releaseChannel"));
    }
}
