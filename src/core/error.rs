use thiserror::Error;

/// Error types for the gallery's ambient surfaces (config persistence, CLI).
///
/// The easing resolver, suggestion filter and path splitter are total and
/// never produce these.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration value is out of range
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },

    /// No XDG data directory could be determined for this user
    #[error("No data directory available for configuration")]
    NoDataDir,
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Self {
        Self::Io(e.error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
