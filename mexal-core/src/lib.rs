//! Mexal Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other Mexal crates:
//! - Client configuration (connection coordinates, credentials, timeouts)
//! - Unified error types
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::MexalConfig;
pub use error::{MexalError, MexalResult};
pub use logging::init_logging;
