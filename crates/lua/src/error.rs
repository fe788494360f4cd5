//! Error types for wns-lua

use thiserror::Error;

/// Errors that can occur during Lua evaluation
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Lua runtime error: {0}")]
    Runtime(#[from] mlua::Error),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Fragment did not return a build environment: {0}")]
    EnvironmentNotReturned(String),

    #[error("Failed to apply patch '{expr}': {message}")]
    Patch { expr: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
