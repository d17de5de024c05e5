//! Error types for appcfg-config

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] appcfg_fs::Error),

    #[error("No package.json found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid app config at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error(
        "Cannot determine the SDK version for {root}: set `sdkVersion` in app.json or install the `expo` package"
    )]
    MissingSdkVersion { root: PathBuf },

    #[error("Failed to read locale '{locale}' from {path}: {source}")]
    LocaleRead {
        locale: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn invalid_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.into(),
        }
    }
}
