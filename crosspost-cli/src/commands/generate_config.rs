//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to fit your target platform");
        println!("2. Use it for conversion:");
        println!(
            "   crosspost convert -i post.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# crosspost CLI configuration

[conversion]
# Replace Weibo emoticon codes like [微笑] with Unicode emoji
convert_emoticons = true

# Rewrite Weibo topic markup #topic# to the cross-platform #topic form
rewrite_hashtags = true

# Prefix each paragraph with a marker glyph
paragraph_markers = false

# One of: arrow, small-diamond, blossom, sparkles, diamond, clover
marker_style = "arrow"

[chunking]
# Split converted text into bounded chunks
enabled = false

# Character budget per chunk
# Recommended: 900 for Xiaohongshu's 1000 character limit, 140 for Twitter
max_chunk_size = 900

[output]
# One of: text, json, markdown
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#
        .to_string()
    }
}
