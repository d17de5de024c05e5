//! App config model, loading, and locale resolution.
//!
//! This crate owns the typed view of a project's `app.json` / `package.json`
//! and the collaborators the publish pipeline calls into:
//!
//! - [`ConfigLoader`] loads the private or public config view
//! - [`LocaleResolver`] replaces locale file references with their JSON
//! - [`ManifestPolicy`] decides whether manifest validation may be skipped

pub mod error;
pub mod loader;
pub mod locales;
pub mod policy;
pub mod public;
pub mod sdk;
pub mod types;

pub use error::{Error, Result};
pub use loader::{ConfigLoader, FileConfigLoader, GetConfigOptions};
pub use locales::{FileLocaleResolver, LocaleResolver};
pub use policy::{EnvManifestPolicy, ManifestPolicy, SKIP_VALIDATION_TOKEN_VAR, StaticManifestPolicy};
pub use sdk::UNVERSIONED;
pub use types::{AndroidStatusBar, AppConfig, BarStyle, PackageJson, ProjectConfig};
