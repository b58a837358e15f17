//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tanka_core::analyzer::command::{DEFAULT_JUMANPP, DEFAULT_KNP};
use tanka_core::batch::DEFAULT_CHUNK_SIZE;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// External analyzer commands
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Loads and validates a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                let message = format!("{}: {}", path.display(), e.message());
                return Err(CliError::ConfigError(message).into());
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that cannot be used
    pub fn validate(&self) -> Result<(), CliError> {
        if self.analyzer.jumanpp.is_empty() {
            return Err(CliError::ConfigError(
                "analyzer.jumanpp must name a program".to_string(),
            ));
        }
        if self.analyzer.knp.is_empty() {
            return Err(CliError::ConfigError(
                "analyzer.knp must name a program".to_string(),
            ));
        }
        if self.performance.chunk_size == 0 {
            return Err(CliError::ConfigError(
                "performance.chunk_size must be greater than zero".to_string(),
            ));
        }
        if !matches!(self.output.format.as_str(), "text" | "json") {
            return Err(CliError::ConfigError(format!(
                "unknown output.format '{}' (expected text or json)",
                self.output.format
            )));
        }
        Ok(())
    }
}

/// Juman++ and KNP command lines
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Juman++ program and arguments
    pub jumanpp: Vec<String>,

    /// KNP program and arguments
    pub knp: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            jumanpp: DEFAULT_JUMANPP.iter().map(|s| s.to_string()).collect(),
            knp: DEFAULT_KNP.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub jobs: usize,

    /// Sentences sent to the analyzer per call
    pub chunk_size: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            jobs: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Separator between poem and sentence in text output
    pub delimiter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            delimiter: "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.analyzer.jumanpp, vec!["jumanpp"]);
        assert_eq!(config.analyzer.knp, vec!["knp", "-tab"]);
        assert_eq!(config.performance.jobs, 0);
        assert_eq!(config.performance.chunk_size, 256);
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.delimiter, "\t");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [performance]
            jobs = 8

            [analyzer]
            knp = ["/opt/knp/bin/knp", "-tab", "-dpnd"]
            "#,
        )
        .unwrap();
        assert_eq!(config.performance.jobs, 8);
        assert_eq!(config.performance.chunk_size, 256);
        assert_eq!(config.analyzer.jumanpp, vec!["jumanpp"]);
        assert_eq!(config.analyzer.knp.len(), 3);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_zero_chunk_size_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tanka.toml");
        fs::write(&path, "[performance]\nchunk_size = 0\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        let cli_error = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_error, CliError::ConfigError(_)));
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut config = CliConfig::default();
        config.output.format = "markdown".to_string();
        assert!(matches!(config.validate(), Err(CliError::ConfigError(_))));
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut config = CliConfig::default();
        config.analyzer.knp.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[performance\njobs = ").unwrap();
        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/tanka.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
