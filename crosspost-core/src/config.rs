//! Conversion options

use crate::error::{CoreError, Result};
use crate::marker::MarkerStyle;

/// Options controlling a conversion pass.
#[derive(Debug, Clone)]
pub struct Options {
    /// Replace Weibo emoticon codes with Unicode emoji.
    pub emoticons: bool,
    /// Rewrite `#topic#` markup to the single-`#` form.
    pub rewrite_hashtags: bool,
    /// Paragraph marker to prefix each paragraph with, if any.
    pub marker: Option<MarkerStyle>,
    /// Character budget per chunk; `None` disables chunking.
    pub max_chunk_size: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            emoticons: true,
            rewrite_hashtags: true,
            marker: None,
            max_chunk_size: None,
        }
    }
}

impl Options {
    /// Create a builder.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Builder for [`Options`].
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Enable or disable emoticon conversion.
    pub fn emoticons(mut self, enabled: bool) -> Self {
        self.options.emoticons = enabled;
        self
    }

    /// Enable or disable `#topic#` rewriting.
    pub fn rewrite_hashtags(mut self, enabled: bool) -> Self {
        self.options.rewrite_hashtags = enabled;
        self
    }

    /// Prefix paragraphs with the given marker.
    pub fn marker(mut self, style: MarkerStyle) -> Self {
        self.options.marker = Some(style);
        self
    }

    /// Split the converted text into chunks of at most `size` characters.
    pub fn max_chunk_size(mut self, size: usize) -> Self {
        self.options.max_chunk_size = Some(size);
        self
    }

    /// Build the options.
    pub fn build(self) -> Result<Options> {
        if self.options.max_chunk_size == Some(0) {
            return Err(CoreError::Config(
                "max_chunk_size must be at least 1".to_string(),
            ));
        }

        Ok(self.options)
    }
}
