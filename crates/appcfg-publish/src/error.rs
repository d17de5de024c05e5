//! Error types for appcfg-publish

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller asked for something that cannot be published.
    #[error("{message}")]
    InvalidOptions { message: String },

    /// A config-loading or locale-resolution failure, passed through as is.
    #[error(transparent)]
    Config(#[from] appcfg_config::Error),
}

impl Error {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Short machine-readable kind, for tooling that reports errors by code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidOptions { .. } => "INVALID_OPTIONS",
            Error::Config(_) => "CONFIG",
        }
    }
}
