//! JSON output formatter

use super::ChunkFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    current_source: Option<String>,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Source file the chunk came from; absent on single-source runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Position of the chunk within its source, starting at 1
    pub index: usize,
    /// The chunk text
    pub text: String,
    /// Length of the chunk in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            current_source: None,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write> ChunkFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        self.current_source = Some(name.to_string());
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &str, index: usize, _total: usize) -> Result<()> {
        self.chunks.push(ChunkData {
            source: self.current_source.clone(),
            index: index + 1,
            text: chunk.to_string(),
            length: chunk.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
