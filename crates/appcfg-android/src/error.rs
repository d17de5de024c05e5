//! Error types for appcfg-android

/// Result type for appcfg-android operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing resource documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {document} XML: {message}")]
    Parse {
        document: &'static str,
        message: String,
    },

    #[error("<{element}> in {document} is missing the `{attribute}` attribute")]
    MissingAttribute {
        document: &'static str,
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Failed to write {document} XML: {message}")]
    Write {
        document: &'static str,
        message: String,
    },

    #[error(transparent)]
    Fs(#[from] appcfg_fs::Error),
}

impl Error {
    pub fn parse(document: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            document,
            message: message.to_string(),
        }
    }

    pub fn write(document: &'static str, message: impl ToString) -> Self {
        Self::Write {
            document,
            message: message.to_string(),
        }
    }
}
