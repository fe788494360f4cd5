//! Error types for wns-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    InvalidPath(String),

    #[error("Failed to install handler for {signal}: {message}")]
    SignalHandler { signal: String, message: String },
}
