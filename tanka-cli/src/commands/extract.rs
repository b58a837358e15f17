//! Extract command implementation

use crate::analyzer_source::{split_command, AnalyzerSource, InputFormat};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_sentences, FileReader};
use crate::output::{OutputFormat, OutputWriter, PoemFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tanka_core::{extract_parallel, BatchConfig, BatchReport, BatchStats, Extractor, Preanalyzed};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files, directories or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write one output file per input into DIR, named by input index
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Format of the input files
    #[arg(long, value_enum, default_value = "text")]
    pub input_format: InputFormat,

    /// Worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Sentences sent to the analyzer per call
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Separator between poem and sentence in text output
    #[arg(long, value_name = "STR")]
    pub delimiter: Option<String>,

    /// Juman++ command line
    #[arg(long, value_name = "CMD", env = "TANKA_JUMANPP")]
    pub jumanpp: Option<String>,

    /// KNP command line (must produce tab format)
    #[arg(long, value_name = "CMD", env = "TANKA_KNP")]
    pub knp: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration file values overridden by command-line flags
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    delimiter: String,
    batch: BatchConfig,
    jumanpp: Vec<String>,
    knp: Vec<String>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;
        let started = Instant::now();

        info!("Starting tanka extraction");
        debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let source = AnalyzerSource::for_format(
            self.input_format,
            settings.jumanpp.clone(),
            settings.knp.clone(),
        )?;
        info!("Analyzer: {}", source.display_name());

        let files = resolve_patterns(&self.input)?;
        info!("Found {} files to process", files.len());

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }

        let mut sink = match &self.output_dir {
            Some(dir) => Sink::PerInput(dir.clone()),
            None => {
                let writer = self.open_output()?;
                Sink::Shared(settings.format.formatter(writer, &settings.delimiter))
            }
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let mut total = BatchStats::default();

        for (index, path) in files.iter().enumerate() {
            info!("start processing file-{} ({})", index, path.display());
            let report = self.extract_file(path, &source, &settings)?;
            info!("{:.3} seconds spent", started.elapsed().as_secs_f64());

            info!("start writing file-{}", index);
            sink.write(index, &report, &settings)?;

            total.merge(&report.stats);
            progress.file_completed(&display_name(path), report.poems.len());
        }

        sink.finish()?;
        progress.finish();

        info!(
            "done: {} poems from {} sentences ({} skipped) in {:.3} seconds",
            total.poems,
            total.sentences,
            total.skipped,
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }

    /// Merges the configuration file with command-line flags
    fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.format).ok_or_else(|| {
                CliError::ConfigError(format!("unknown output format '{}'", config.output.format))
            })?,
        };

        let batch = BatchConfig {
            jobs: self.jobs.unwrap_or(config.performance.jobs),
            chunk_size: self.chunk_size.unwrap_or(config.performance.chunk_size),
        };
        batch.validate().map_err(CliError::from)?;

        Ok(Settings {
            format,
            delimiter: self.delimiter.clone().unwrap_or(config.output.delimiter),
            batch,
            jumanpp: self
                .jumanpp
                .as_deref()
                .map(split_command)
                .unwrap_or(config.analyzer.jumanpp),
            knp: self
                .knp
                .as_deref()
                .map(split_command)
                .unwrap_or(config.analyzer.knp),
        })
    }

    fn extract_file(
        &self,
        path: &Path,
        source: &AnalyzerSource,
        settings: &Settings,
    ) -> Result<BatchReport> {
        let content = FileReader::read_text(path)?;

        let report = match source {
            AnalyzerSource::Pipeline(command) => {
                let sentences = split_sentences(&content);
                debug!("{}: {} sentences", path.display(), sentences.len());
                extract_parallel(&Extractor::new(command), &sentences, &settings.batch)
            }
            AnalyzerSource::Preanalyzed => {
                let preanalyzed = Preanalyzed::from_knp(&content);
                if preanalyzed.malformed() > 0 {
                    warn!(
                        "{}: skipped {} malformed sentences",
                        path.display(),
                        preanalyzed.malformed()
                    );
                }
                let sentences: Vec<&str> =
                    preanalyzed.sentences().iter().map(String::as_str).collect();
                debug!("{}: {} sentences", path.display(), sentences.len());
                extract_parallel(&Extractor::new(&preanalyzed), &sentences, &settings.batch)
            }
        };

        report
            .map_err(CliError::from)
            .with_context(|| format!("Failed to process {}", path.display()))
    }

    fn open_output(&self) -> Result<OutputWriter> {
        match &self.output {
            Some(path) => create_file(path),
            None => Ok(Box::new(io::stdout())),
        }
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

/// Where formatted poems go
enum Sink {
    /// Every input into one formatter
    Shared(Box<dyn PoemFormatter>),
    /// One file per input, named by the input's index
    PerInput(PathBuf),
}

impl Sink {
    fn write(&mut self, index: usize, report: &BatchReport, settings: &Settings) -> Result<()> {
        match self {
            Sink::Shared(formatter) => write_poems(formatter.as_mut(), report),
            Sink::PerInput(dir) => {
                let output = dir.join(index.to_string());
                let mut formatter = settings
                    .format
                    .formatter(create_file(&output)?, &settings.delimiter);
                write_poems(formatter.as_mut(), report)?;
                formatter.finish()
            }
        }
    }

    fn finish(self) -> Result<()> {
        match self {
            Sink::Shared(mut formatter) => formatter.finish(),
            Sink::PerInput(_) => Ok(()),
        }
    }
}

fn create_file(path: &Path) -> Result<OutputWriter> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn write_poems(formatter: &mut dyn PoemFormatter, report: &BatchReport) -> Result<()> {
    for poem in &report.poems {
        formatter.format_poem(poem)?;
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> ExtractArgs {
        ExtractArgs {
            input: vec![input.to_string()],
            output: None,
            output_dir: None,
            format: None,
            input_format: InputFormat::Text,
            jobs: None,
            chunk_size: None,
            config: None,
            delimiter: None,
            jumanpp: None,
            knp: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = args("in.txt").settings().unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.delimiter, "\t");
        assert_eq!(settings.batch, BatchConfig::default());
        assert_eq!(settings.jumanpp, vec!["jumanpp"]);
        assert_eq!(settings.knp, vec!["knp", "-tab"]);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tanka.toml");
        let config = "[performance]\njobs = 2\nchunk_size = 16\n\n\
                      [output]\nformat = \"json\"\ndelimiter = \",\"\n";
        fs::write(&config_path, config).unwrap();

        let mut extract = args("in.txt");
        extract.config = Some(config_path);
        extract.jobs = Some(6);
        extract.knp = Some("/opt/knp -tab -dpnd".to_string());

        let settings = extract.settings().unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.delimiter, ",");
        assert_eq!(settings.batch.jobs, 6);
        assert_eq!(settings.batch.chunk_size, 16);
        assert_eq!(settings.knp, vec!["/opt/knp", "-tab", "-dpnd"]);
    }

    #[test]
    fn test_zero_chunk_size_flag_rejected() {
        let mut extract = args("in.txt");
        extract.chunk_size = Some(0);
        let err = extract.settings().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("corpus/0.txt")), "0.txt");
    }
}
