//! Input and output types for conversion

use crate::error::{CoreError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for a conversion
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(CoreError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(|e| e.into()),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(CoreError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Statistics about a conversion run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Characters in the input text
    pub input_chars: usize,
    /// Characters in the converted text, before chunking
    pub output_chars: usize,
    /// Number of chunks produced, when chunking was enabled
    pub chunk_count: Option<usize>,
    /// Processing time in microseconds
    pub processing_time_us: u64,
}

/// Complete conversion result
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The converted text
    pub text: String,
    /// Chunks of the converted text, when chunking was enabled
    pub chunks: Option<Vec<String>>,
    /// Hashtags found in the converted text, in first-occurrence order
    pub hashtags: Vec<String>,
    /// Conversion statistics
    pub metadata: Metadata,
}

impl Output {
    /// The pieces to publish: the chunks when chunking was enabled,
    /// otherwise the whole converted text as a single piece.
    pub fn pieces(&self) -> Vec<&str> {
        match &self.chunks {
            Some(chunks) => chunks.iter().map(String::as_str).collect(),
            None => vec![self.text.as_str()],
        }
    }
}
