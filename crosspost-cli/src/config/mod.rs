//! Configuration module

use crosspost_core::MarkerStyle;
use serde::{Deserialize, Serialize};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ConversionConfig {
    /// Replace Weibo emoticon codes with Unicode emoji
    pub convert_emoticons: bool,

    /// Rewrite `#topic#` markup to the single-`#` form
    pub rewrite_hashtags: bool,

    /// Prefix paragraphs with a marker glyph
    pub paragraph_markers: bool,

    /// Marker glyph to use
    pub marker_style: MarkerStyle,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            convert_emoticons: true,
            rewrite_hashtags: true,
            paragraph_markers: false,
            marker_style: MarkerStyle::Arrow,
        }
    }
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Split converted text into bounded chunks
    pub enabled: bool,

    /// Character budget per chunk
    pub max_chunk_size: u32,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_chunk_size: 900,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}
