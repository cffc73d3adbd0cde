//! Plain text output formatter

use super::ChunkFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs chunks separated by a rule line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ChunkFormatter for TextFormatter<W> {
    fn begin_source(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "==> {} <==", name)?;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &str, index: usize, total: usize) -> Result<()> {
        writeln!(self.writer, "{}", chunk)?;
        if index + 1 < total {
            writeln!(self.writer, "---")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk_has_no_separator() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            formatter.format_chunk("只有一段", 0, 1).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "只有一段\n");
    }

    #[test]
    fn test_chunks_separated_by_rule() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            formatter.format_chunk("first", 0, 2).unwrap();
            formatter.format_chunk("second", 1, 2).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "first\n---\nsecond\n");
    }

    #[test]
    fn test_source_header_precedes_chunks() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            formatter.begin_source("a.txt").unwrap();
            formatter.format_chunk("first", 0, 1).unwrap();
            formatter.begin_source("b.txt").unwrap();
            formatter.format_chunk("second", 0, 1).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "==> a.txt <==\nfirst\n==> b.txt <==\nsecond\n"
        );
    }
}
