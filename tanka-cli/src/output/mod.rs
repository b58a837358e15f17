//! Output formatting module

use anyhow::Result;
use std::io::Write;
use tanka_core::OwnedPoem;

/// Trait for output formatters
pub trait PoemFormatter: Send + Sync {
    /// Format and output a single accepted poem
    fn format_poem(&mut self, poem: &OwnedPoem) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Writers the formatters can target
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `poem<delimiter>sentence` line per poem
    Text,
    /// JSON array of poems with their verse lines
    Json,
}

impl OutputFormat {
    /// Parses a format name as written in the configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Creates a formatter writing to `writer`
    pub fn formatter(self, writer: OutputWriter, delimiter: &str) -> Box<dyn PoemFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::with_delimiter(writer, delimiter)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}
