//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use crosspost_core::{Input, MarkerStyle, Options, Output, PostConverter};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{ChunkFormatter, JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input files or glob patterns; use "-" to read from stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Prefix each paragraph with a marker glyph
    #[arg(short, long)]
    pub markers: bool,

    /// Marker glyph to use with --markers
    #[arg(long, value_enum, value_name = "STYLE")]
    pub marker_style: Option<MarkerStyleArg>,

    /// Split the converted text into bounded chunks
    #[arg(short, long)]
    pub split: bool,

    /// Character budget per chunk when splitting (default: 900)
    #[arg(long, value_name = "CHARS", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_chunk_size: Option<u32>,

    /// Keep Weibo emoticon codes instead of converting them
    #[arg(long)]
    pub no_emoticons: bool,

    /// Keep `#topic#` markup instead of rewriting it
    #[arg(long)]
    pub no_hashtag_rewrite: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunks separated by a rule line
    Text,
    /// JSON array of chunks with character counts
    Json,
    /// Numbered chunk sections with a summary
    Markdown,
}

impl OutputFormat {
    fn formatter(self, writer: Box<dyn Write>, pretty: bool) -> Box<dyn ChunkFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Marker styles accepted on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MarkerStyleArg {
    /// ➤
    Arrow,
    /// 🔹
    SmallDiamond,
    /// 🌸
    Blossom,
    /// ✨
    Sparkles,
    /// 💠
    Diamond,
    /// 🍀
    Clover,
}

impl From<MarkerStyleArg> for MarkerStyle {
    fn from(style: MarkerStyleArg) -> Self {
        match style {
            MarkerStyleArg::Arrow => MarkerStyle::Arrow,
            MarkerStyleArg::SmallDiamond => MarkerStyle::SmallDiamond,
            MarkerStyleArg::Blossom => MarkerStyle::Blossom,
            MarkerStyleArg::Sparkles => MarkerStyle::Sparkles,
            MarkerStyleArg::Diamond => MarkerStyle::Diamond,
            MarkerStyleArg::Clover => MarkerStyle::Clover,
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        let config = self.load_config()?;
        let options = self.effective_options(&config)?;
        let converter = PostConverter::with_options(options);

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let results = if self.reads_stdin() {
            let text = FileReader::read_stdin()?;
            vec![(None, converter.convert(Input::from_text(text))?)]
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Converting {} file(s)", files.len());

            let progress = ProgressReporter::for_files(files.len() as u64, self.quiet);

            let outputs = files
                .par_iter()
                .map(|path| {
                    let label = path.display().to_string();
                    let text = FileReader::read_text(path)?;
                    let output = converter.convert(Input::from_text(text))?;
                    progress.post_converted(&label, output.metadata.chunk_count.unwrap_or(1));
                    Ok((Some(label), output))
                })
                .collect::<Result<Vec<_>>>();
            progress.finish();
            outputs?
        };

        self.write_results(&results, &config)
    }

    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == "-"
    }

    /// Load the TOML config file, or defaults when none is given
    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let config =
                    toml::from_str(&content).map_err(|e| CliError::ConfigError(e.to_string()))?;
                Ok(config)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Merge CLI flags over config file values into conversion options
    fn effective_options(&self, config: &CliConfig) -> Result<Options> {
        let mut builder = Options::builder()
            .emoticons(!self.no_emoticons && config.conversion.convert_emoticons)
            .rewrite_hashtags(!self.no_hashtag_rewrite && config.conversion.rewrite_hashtags);

        if self.markers || config.conversion.paragraph_markers {
            let style = self
                .marker_style
                .map(MarkerStyle::from)
                .unwrap_or(config.conversion.marker_style);
            builder = builder.marker(style);
        }

        if self.split || config.chunking.enabled {
            let size = self.max_chunk_size.unwrap_or(config.chunking.max_chunk_size);
            builder = builder.max_chunk_size(size as usize);
        }

        Ok(builder.build()?)
    }

    fn write_results(&self, results: &[(Option<String>, Output)], config: &CliConfig) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };

        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };

        let mut formatter = format.formatter(writer, config.output.pretty_json);
        // Label chunks with their source file only when there is more than
        // one source to tell apart.
        let label_sources = results.len() > 1;
        for (source, output) in results {
            if label_sources {
                if let Some(source) = source {
                    formatter.begin_source(source)?;
                }
            }
            let pieces = output.pieces();
            for (index, piece) in pieces.iter().enumerate() {
                formatter.format_chunk(piece, index, pieces.len())?;
            }
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
