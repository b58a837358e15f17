//! Where the morphological analysis of an input file comes from

use crate::error::CliError;
use tanka_core::KnpCommand;

/// Format of the input files
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Raw prose, split on `。` and sent to Juman++ and KNP
    Text,
    /// Output of `knp -tab`, one EOS block per sentence
    Knp,
}

impl InputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Text => "text",
            InputFormat::Knp => "knp",
        }
    }
}

/// Source of the analysis for every sentence
#[derive(Debug, Clone)]
pub enum AnalyzerSource {
    /// `jumanpp | knp` run as external processes
    Pipeline(KnpCommand),
    /// The input files already hold KNP output
    Preanalyzed,
}

impl AnalyzerSource {
    /// Chooses the source for `format`, building the pipeline from the two
    /// command lines when it is needed.
    pub fn for_format(
        format: InputFormat,
        jumanpp: Vec<String>,
        knp: Vec<String>,
    ) -> Result<Self, CliError> {
        match format {
            InputFormat::Text => KnpCommand::new(jumanpp, knp)
                .map(AnalyzerSource::Pipeline)
                .map_err(|e| CliError::ConfigError(e.to_string())),
            InputFormat::Knp => Ok(AnalyzerSource::Preanalyzed),
        }
    }

    /// Get the display name for the analyzer source
    pub fn display_name(&self) -> String {
        match self {
            AnalyzerSource::Pipeline(command) => format!(
                "Pipeline: {} | {}",
                command.jumanpp().join(" "),
                command.knp().join(" ")
            ),
            AnalyzerSource::Preanalyzed => "Pre-analyzed KNP input".to_string(),
        }
    }
}

/// Splits a command line given as a single string on whitespace
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}
