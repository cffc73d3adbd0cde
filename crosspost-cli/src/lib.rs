//! crosspost CLI library
//!
//! This library provides the command-line interface for converting
//! Weibo posts into forms suitable for cross-posting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
