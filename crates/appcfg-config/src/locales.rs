//! Locale resolution
//!
//! `locales` in an app config maps a locale tag to either a JSON file path
//! (relative to the project root) or an inline object. Resolution replaces
//! every path with the parsed file content.

use std::collections::BTreeMap;

use appcfg_fs::{ProjectPath, io};
use async_trait::async_trait;
use serde_json::Value;

use crate::{AppConfig, Error, Result};

/// Resolves the `locales` of an app config.
#[async_trait]
pub trait LocaleResolver: Send + Sync {
    async fn resolve_locales(
        &self,
        root: &ProjectPath,
        exp: &AppConfig,
    ) -> Result<BTreeMap<String, Value>>;
}

/// Reads locale files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLocaleResolver;

impl FileLocaleResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocaleResolver for FileLocaleResolver {
    async fn resolve_locales(
        &self,
        root: &ProjectPath,
        exp: &AppConfig,
    ) -> Result<BTreeMap<String, Value>> {
        let mut resolved = BTreeMap::new();
        let Some(locales) = &exp.locales else {
            return Ok(resolved);
        };

        for (locale, reference) in locales {
            let value = match reference {
                Value::String(file) => {
                    let path = root.resolve_reference(file);
                    let content = tokio::fs::read_to_string(&path).await.map_err(|source| {
                        Error::LocaleRead {
                            locale: locale.clone(),
                            path: path.clone(),
                            source,
                        }
                    })?;
                    tracing::debug!(%locale, path = %root.display_relative(&path), "Resolved locale file");
                    io::parse_json(&path, &content)?
                }
                inline => inline.clone(),
            };
            resolved.insert(locale.clone(), value);
        }

        Ok(resolved)
    }
}
