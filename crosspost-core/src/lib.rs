//! Weibo post conversion for cross-platform posting
//!
//! Converts Weibo-flavored text (bracket emoticons, `#topic#` markup) into
//! forms other platforms render correctly, optionally decorates paragraphs
//! with marker glyphs, and splits long posts into bounded-length chunks
//! that respect paragraph, line, sentence, and word boundaries.
//!
//! ```
//! use crosspost_core::{Input, Options, PostConverter};
//!
//! let converter = PostConverter::with_options(
//!     Options::builder().max_chunk_size(140).build().unwrap(),
//! );
//! let output = converter
//!     .convert(Input::from_text("今天去了#北京动物园#看熊猫[爱你]"))
//!     .unwrap();
//! assert_eq!(output.text, "今天去了#北京动物园看熊猫❤️");
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod dto;
pub mod emoticon;
pub mod error;
pub mod hashtag;
pub mod marker;

pub use chunker::split_into_chunks;
pub use config::{Options, OptionsBuilder};
pub use dto::{Input, Metadata, Output};
pub use emoticon::convert_emoticons;
pub use error::{CoreError, Result};
pub use hashtag::{convert_hashtags, extract_hashtags};
pub use marker::{add_paragraph_markers, MarkerStyle};

/// Applies the configured conversion passes to input text.
///
/// The pipeline runs emoticon substitution, `#topic#` rewriting, and
/// paragraph markers in that order, then extracts hashtags from the
/// converted text and, when a chunk budget is set, splits it into chunks.
pub struct PostConverter {
    options: Options,
}

impl PostConverter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a converter with specific options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run the conversion pipeline on the input.
    pub fn convert(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let input_chars = text.chars().count();

        let mut converted = text;
        if self.options.emoticons {
            converted = convert_emoticons(&converted);
        }
        if self.options.rewrite_hashtags {
            converted = convert_hashtags(&converted);
        }
        if let Some(style) = self.options.marker {
            converted = add_paragraph_markers(&converted, style);
        }

        let hashtags = extract_hashtags(&converted);
        let chunks = self
            .options
            .max_chunk_size
            .map(|size| split_into_chunks(&converted, size));

        let metadata = Metadata {
            input_chars,
            output_chars: converted.chars().count(),
            chunk_count: chunks.as_ref().map(Vec::len),
            processing_time_us: start.elapsed().as_micros() as u64,
        };

        Ok(Output {
            text: converted,
            chunks,
            hashtags,
            metadata,
        })
    }

    /// Convert text directly (convenience method).
    pub fn convert_text(&self, text: &str) -> Result<Output> {
        self.convert(Input::from_text(text))
    }
}

impl Default for PostConverter {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Convert text with default options.
pub fn convert_text(text: &str) -> Result<Output> {
    PostConverter::new().convert(Input::from_text(text))
}

/// Convert a file with default options.
pub fn convert_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    PostConverter::new().convert(Input::from_file(path.as_ref().to_path_buf()))
}
