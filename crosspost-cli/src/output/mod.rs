//! Output formatting module

use anyhow::Result;

/// Trait for chunk output formatters
pub trait ChunkFormatter {
    /// Announce the source file the following chunks came from.
    ///
    /// Called once per file on multi-file runs; single-source runs skip it.
    fn begin_source(&mut self, name: &str) -> Result<()>;

    /// Format and output a single chunk
    fn format_chunk(&mut self, chunk: &str, index: usize, total: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
