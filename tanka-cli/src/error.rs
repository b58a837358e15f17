//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Extraction or analyzer failure
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<tanka_core::ExtractError> for CliError {
    fn from(err: tanka_core::ExtractError) -> Self {
        match err {
            tanka_core::ExtractError::InvalidConfig(msg) => CliError::ConfigError(msg),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use tanka_core::{AnalyzerError, ExtractError};

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("corpus/0.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus/0.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("chunk_size must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: chunk_size must be positive"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("knp exited with 1".to_string());
        assert_eq!(error.to_string(), "Processing error: knp exited with 1");
    }

    #[test]
    fn test_from_extract_error() {
        let error = CliError::from(ExtractError::InvalidConfig("bad".to_string()));
        assert!(matches!(error, CliError::ConfigError(msg) if msg == "bad"));

        let error = CliError::from(ExtractError::Analyzer(AnalyzerError::EmptyCommand("knp")));
        assert_eq!(
            error.to_string(),
            "Processing error: analyzer error: empty knp command"
        );
    }

    #[test]
    fn test_error_with_japanese_path() {
        let error = CliError::FileNotFound("歌集/万葉集.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 歌集/万葉集.txt");
    }

    #[test]
    fn test_cli_result_type_alias() {
        fn resolve() -> CliResult<()> {
            Err(CliError::InvalidPattern("*.{".to_string()).into())
        }

        let error: anyhow::Error = match resolve() {
            Err(error) => error,
            Ok(()) => panic!("pattern should be rejected"),
        };
        assert!(error.to_string().contains("Invalid file pattern"));
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
