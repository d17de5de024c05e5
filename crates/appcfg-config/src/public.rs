//! Public projection of an app config
//!
//! The public view is what gets embedded in a published manifest, so it
//! must not carry hooks or platform secrets.

use serde_json::Value;

use crate::AppConfig;

/// Nested keys stripped from the public view, as `(section, key)`.
const PRIVATE_NESTED_KEYS: &[(&str, &str)] = &[
    ("ios", "config"),
    ("android", "config"),
    ("updates", "codeSigningCertificate"),
];

/// Top-level keys stripped from the public view.
const PRIVATE_TOP_LEVEL_KEYS: &[&str] = &["_internal"];

/// Remove everything that must not appear in a public manifest.
pub fn make_public(mut exp: AppConfig) -> AppConfig {
    exp.hooks = None;

    for key in PRIVATE_TOP_LEVEL_KEYS {
        exp.extra.remove(*key);
    }

    for (section, key) in PRIVATE_NESTED_KEYS {
        if let Some(Value::Object(map)) = exp.extra.get_mut(*section) {
            if map.remove(*key).is_some() {
                tracing::debug!("Stripped {}.{} from public config", section, key);
            }
        }
    }

    exp
}
