//! Error types for appcfg-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] appcfg_config::Error),

    #[error(transparent)]
    Android(#[from] appcfg_android::Error),

    #[error(transparent)]
    Publish(#[from] appcfg_publish::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
