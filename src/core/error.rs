use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemediationError {
    /// Structured rejection surfaced by the service client
    /// (permission denied, instance not found, throttling, ...).
    #[error("An error occurred ({code}): {message}")]
    Service { code: String, message: String },

    /// Anything else: malformed response, programming error.
    #[error("{0}")]
    Unexpected(String),
}

impl RemediationError {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RemediationError>;
