//! Markdown output formatter

use super::ChunkFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs chunks as numbered sections
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }
}

impl<W: Write> ChunkFormatter for MarkdownFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "## {}", name)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &str, index: usize, total: usize) -> Result<()> {
        self.chunk_count += 1;
        writeln!(
            self.writer,
            "### Chunk {}/{} ({} characters)",
            index + 1,
            total,
            chunk.chars().count()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
