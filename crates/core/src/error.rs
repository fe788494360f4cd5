//! Error types for wns-core

use thiserror::Error;

/// Errors that can occur in runner operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Lua evaluation error: {0}")]
    Lua(#[from] wns_lua::EvalError),

    #[error("Platform error: {0}")]
    Platform(#[from] wns_platform::PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Couldn't write to file: {path}")]
    StatusWrite { path: String },

    #[error("Couldn't access output directory '{path}': {message}")]
    OutputDirAccess { path: String, message: String },

    #[error("No such output preparation strategy: {0} (available: move, delete)")]
    UnknownOutputStrategy(String),

    #[error("Run interrupted")]
    Interrupted,
}
