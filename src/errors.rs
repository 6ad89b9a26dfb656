//! Structured error types for botones-alerta
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations. The dialog logic itself cannot fail;
//! these cover the shell around it.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors in botones-alerta
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file exists but could not be read
    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for our schema
    #[error("Invalid config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Terminal setup or restoration error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Convenience Result type using AppError
pub type Result<T> = std::result::Result<T, AppError>;
