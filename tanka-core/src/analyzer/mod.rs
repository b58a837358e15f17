//! The seam to the external morphological analyzer
//!
//! Extraction never looks at raw text beyond the character gate; it consumes
//! phrases of [`Token`]s produced by an [`Analyzer`]. Two kinds of failure are
//! kept apart:
//! - [`AnalyzerError`]: the analyzer itself is unusable. Fatal for the batch.
//! - [`MalformedOutput`]: the output for one sentence cannot be used. Only that
//!   sentence is skipped.

pub mod command;
pub mod knp;
pub mod preanalyzed;

pub use command::KnpCommand;
pub use preanalyzed::Preanalyzed;

use crate::morpheme::Token;
use crate::tags::UnknownTag;
use std::io;
use thiserror::Error;

/// Phrases of tokens for one sentence, or why they are unusable
pub type Analysis = Result<Vec<Vec<Token>>, MalformedOutput>;

/// Analyzer output for a single sentence that cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedOutput {
    /// A morpheme line appeared before any phrase header
    #[error("line {line}: morpheme outside of a phrase")]
    MorphemeOutsidePhrase {
        /// 1-based line number in the analyzer output
        line: usize,
    },

    /// A phrase header was not followed by any morpheme
    #[error("line {line}: phrase without morphemes")]
    EmptyPhrase {
        /// 1-based line number of the phrase header
        line: usize,
    },

    /// A morpheme line had too few fields
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        /// 1-based line number in the analyzer output
        line: usize,
        /// Minimum number of fields
        expected: usize,
        /// Number of fields present
        found: usize,
    },

    /// A tag outside the analyzer's inventory
    #[error("line {line}: {source}")]
    UnknownTag {
        /// 1-based line number in the analyzer output
        line: usize,
        /// The rejected tag
        source: UnknownTag,
    },

    /// Output ended without the `EOS` terminator
    #[error("sentence not terminated by EOS")]
    Unterminated,

    /// The text spans several lines and cannot be fed to a line-based analyzer
    #[error("sentence contains a line break")]
    MultiLine,

    /// A pre-analyzed source has no entry for the sentence
    #[error("no analysis available for {0:?}")]
    NotAnalyzed(String),
}

/// The analyzer cannot be used at all
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The command line is empty
    #[error("empty {0} command")]
    EmptyCommand(&'static str),

    /// A process could not be started
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Reading from or writing to the analyzer failed
    #[error("I/O error talking to {program}: {source}")]
    Io {
        /// Program being talked to
        program: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A process exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        /// Program that failed
        program: String,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error, if any
        stderr: String,
    },

    /// Output is not valid UTF-8
    #[error("{program} produced invalid UTF-8")]
    Encoding {
        /// Program that produced the output
        program: String,
    },

    /// Output did not contain one analysis per input sentence
    #[error("analyzer returned {actual} sentences for {expected} inputs")]
    SentenceCount {
        /// Number of sentences sent
        expected: usize,
        /// Number of analyses received
        actual: usize,
    },
}

/// A morphological analyzer producing phrases of tokens
///
/// Implementations must be shareable across worker threads.
pub trait Analyzer: Send + Sync {
    /// Analyzes one sentence
    fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError>;

    /// Analyzes several sentences, one analysis per input in input order.
    ///
    /// The default calls [`Analyzer::analyze`] for each text; implementations
    /// with a per-call setup cost override it.
    fn analyze_batch(&self, texts: &[&str]) -> Result<Vec<Analysis>, AnalyzerError> {
        texts.iter().map(|text| self.analyze(text)).collect()
    }

    /// Short name used in log messages
    fn name(&self) -> &'static str;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError> {
        (**self).analyze(text)
    }

    fn analyze_batch(&self, texts: &[&str]) -> Result<Vec<Analysis>, AnalyzerError> {
        (**self).analyze_batch(texts)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError> {
        (**self).analyze(text)
    }

    fn analyze_batch(&self, texts: &[&str]) -> Result<Vec<Analysis>, AnalyzerError> {
        (**self).analyze_batch(texts)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
