//! Core error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced by the conversion library
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, CoreError>;
