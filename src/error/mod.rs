//! Error types for Veritas.

use thiserror::Error;

/// Primary error type for all Veritas operations.
#[derive(Error, Debug)]
pub enum VeritasError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid response: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Coarse classification used by callers that only care about the failure
/// class, not the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connectivity loss, DNS failure, or the fixed request timeout.
    Transport,
    /// The backend rejected the bearer token (401).
    Authorization,
    /// The backend answered, but with a body we could not interpret.
    Validation,
    /// Any other non-success API response.
    Api,
    /// Local failure: configuration, IO, serialization, state.
    Local,
}

impl VeritasError {
    /// Create an API error for a non-success status.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) | Self::Timeout(_) => ErrorCategory::Transport,
            Self::Unauthorized(_) => ErrorCategory::Authorization,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Api { status, .. } => match status {
                401 => ErrorCategory::Authorization,
                _ => ErrorCategory::Api,
            },
            _ => ErrorCategory::Local,
        }
    }

    /// Whether this is a transport-level failure (timeout, connectivity).
    ///
    /// Transport failures must never invalidate the session; only
    /// authorization failures do.
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// Whether the backend rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }
}

impl From<serde_json::Error> for VeritasError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::de::Error> for VeritasError {
    fn from(error: toml::de::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<toml::ser::Error> for VeritasError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VeritasError>;
