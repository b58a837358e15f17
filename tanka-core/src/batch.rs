//! Chunked fan-out of sentences over worker threads
//!
//! Each chunk is one [`Extractor::process_batch`] call, so an external
//! analyzer is started once per chunk rather than once per sentence.

use crate::analyzer::Analyzer;
use crate::error::{ExtractError, Result};
use crate::extractor::{Extractor, Outcome};
use crate::poem::OwnedPoem;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sentences per analyzer call unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// How a batch is split and run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Worker threads; 0 means one per CPU
    pub jobs: usize,
    /// Sentences per analyzer call
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl BatchConfig {
    /// Sets the number of worker threads
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Sets the number of sentences per analyzer call
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Rejects settings that cannot be run
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ExtractError::InvalidConfig(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Worker threads actually used
    pub fn thread_count(&self) -> usize {
        match self.jobs {
            #[cfg(feature = "parallel")]
            0 => num_cpus::get(),
            #[cfg(not(feature = "parallel"))]
            0 => 1,
            jobs => jobs,
        }
    }
}

/// Counters over one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Sentences seen
    pub sentences: usize,
    /// Sentences that were analyzed
    pub analyzed: usize,
    /// Sentences passed over
    pub skipped: usize,
    /// Accepted poems
    pub poems: usize,
}

impl BatchStats {
    fn record(&mut self, outcome: &Outcome) {
        self.sentences += 1;
        match outcome {
            Outcome::Analyzed(poems) => {
                self.analyzed += 1;
                self.poems += poems.len();
            }
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// Adds the counters of another batch
    pub fn merge(&mut self, other: &BatchStats) {
        self.sentences += other.sentences;
        self.analyzed += other.analyzed;
        self.skipped += other.skipped;
        self.poems += other.poems;
    }
}

/// Poems of a batch in input order, with counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Accepted poems
    pub poems: Vec<OwnedPoem>,
    /// Counters
    pub stats: BatchStats,
}

impl BatchReport {
    /// Collects outcomes, keeping their order
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            report.stats.record(&outcome);
            report.poems.extend(outcome.into_poems());
        }
        report
    }
}

/// Extracts poems from `texts`, spreading chunks over worker threads.
///
/// Results are identical to a sequential run.
#[cfg(feature = "parallel")]
pub fn extract_parallel<A: Analyzer>(
    extractor: &Extractor<A>,
    texts: &[&str],
    config: &BatchConfig,
) -> Result<BatchReport> {
    config.validate()?;
    let threads = config.thread_count();
    debug!(
        "Extracting from {} sentences in chunks of {} on {} threads",
        texts.len(),
        config.chunk_size,
        threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("tanka-worker-{i}"))
        .build()
        .map_err(|e| ExtractError::ThreadPool(e.to_string()))?;

    let chunks = pool.install(|| {
        texts
            .par_chunks(config.chunk_size)
            .map(|chunk| extractor.process_batch(chunk))
            .collect::<Result<Vec<_>>>()
    })?;

    Ok(BatchReport::from_outcomes(chunks.into_iter().flatten()))
}

/// Extracts poems from `texts` one chunk at a time.
#[cfg(not(feature = "parallel"))]
pub fn extract_parallel<A: Analyzer>(
    extractor: &Extractor<A>,
    texts: &[&str],
    config: &BatchConfig,
) -> Result<BatchReport> {
    config.validate()?;
    debug!(
        "Extracting from {} sentences in chunks of {}",
        texts.len(),
        config.chunk_size
    );

    let chunks = texts
        .chunks(config.chunk_size)
        .map(|chunk| extractor.process_batch(chunk))
        .collect::<Result<Vec<_>>>()?;

    Ok(BatchReport::from_outcomes(chunks.into_iter().flatten()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analysis, AnalyzerError, MalformedOutput};
    use crate::morpheme::Token;
    use crate::tags::{PartOfSpeech, PosSubcategory};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Every sentence is one noun phrase per character; counts batch calls
    #[derive(Default)]
    struct PerCharacter {
        batches: AtomicUsize,
    }

    impl Analyzer for PerCharacter {
        fn analyze(&self, text: &str) -> std::result::Result<Analysis, AnalyzerError> {
            if text.starts_with('を') {
                return Ok(Err(MalformedOutput::Unterminated));
            }
            Ok(Ok(text
                .chars()
                .map(|c| {
                    let s = c.to_string();
                    vec![Token::new(s.clone(), s, PartOfSpeech::Noun, PosSubcategory::CommonNoun)]
                })
                .collect()))
        }

        fn analyze_batch(
            &self,
            texts: &[&str],
        ) -> std::result::Result<Vec<Analysis>, AnalyzerError> {
            self.batches.fetch_add(1, Ordering::SeqCst);
            texts.iter().map(|text| self.analyze(text)).collect()
        }

        fn name(&self) -> &'static str {
            "per-character"
        }
    }

    struct Broken;

    impl Analyzer for Broken {
        fn analyze(&self, _text: &str) -> std::result::Result<Analysis, AnalyzerError> {
            Err(AnalyzerError::EmptyCommand("knp"))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(config.thread_count() >= 1);
        assert_eq!(config.with_jobs(3).thread_count(), 3);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let extractor = Extractor::new(PerCharacter::default());
        let config = BatchConfig::default().with_chunk_size(0);
        assert!(matches!(
            extract_parallel(&extractor, &["あ"], &config),
            Err(ExtractError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_one_analyzer_call_per_chunk() {
        let extractor = Extractor::new(PerCharacter::default());
        let texts = vec!["あ"; 10];
        let config = BatchConfig::default().with_jobs(2).with_chunk_size(4);
        let report = extract_parallel(&extractor, &texts, &config).unwrap();
        assert_eq!(extractor.analyzer().batches.load(Ordering::SeqCst), 3);
        assert_eq!(report.stats.sentences, 10);
        assert_eq!(report.stats.analyzed, 10);
        assert!(report.poems.is_empty());
    }

    #[test]
    fn test_stats_count_skips() {
        let extractor = Extractor::new(PerCharacter::default());
        // 31 single-mora phrases never end on a verse-final word
        let long = "あ".repeat(31);
        let texts = ["abc", "をかし", long.as_str(), "はる"];
        let config = BatchConfig::default().with_jobs(2).with_chunk_size(1);
        let report = extract_parallel(&extractor, &texts, &config).unwrap();
        assert_eq!(
            report.stats,
            BatchStats {
                sentences: 4,
                analyzed: 2,
                skipped: 2,
                poems: 0
            }
        );
    }

    #[test]
    fn test_analyzer_failure_is_fatal() {
        let extractor = Extractor::new(Broken);
        let result = extract_parallel(&extractor, &["はる"], &BatchConfig::default().with_jobs(1));
        assert!(matches!(result, Err(ExtractError::Analyzer(_))));
    }

    #[test]
    fn test_stats_merge() {
        let mut total = BatchStats {
            sentences: 2,
            analyzed: 1,
            skipped: 1,
            poems: 3,
        };
        total.merge(&BatchStats {
            sentences: 1,
            analyzed: 1,
            skipped: 0,
            poems: 1,
        });
        assert_eq!(total.sentences, 3);
        assert_eq!(total.poems, 4);
    }
}
