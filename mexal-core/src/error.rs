//! Global error types for the Mexal client.
//!
//! All error categories across the workspace are unified into a single
//! `MexalError` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using MexalError.
pub type MexalResult<T> = Result<T, MexalError>;

/// Unified error type covering all error categories in the Mexal client.
#[derive(Error, Debug)]
pub enum MexalError {
    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP request failed.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Server returned a non-200 status.
    #[error("server error (status {status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    // -- Data errors --
    /// Response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for MexalError {
    fn from(e: serde_json::Error) -> Self {
        MexalError::Decode(e.to_string())
    }
}

impl From<toml::de::Error> for MexalError {
    fn from(e: toml::de::Error) -> Self {
        MexalError::Config(e.to_string())
    }
}
