//! Sentence-level driver: gate, analyze, count, detect, classify

use crate::analyzer::{Analysis, Analyzer, AnalyzerError, MalformedOutput};
use crate::charset::is_eligible;
use crate::classifier::classify;
use crate::error::Result;
use crate::mora::InvalidReadingError;
use crate::morpheme::{Sentence, SentenceError};
use crate::pattern::find_windows;
use crate::poem::{OwnedPoem, Poem};
use log::{debug, trace};
use std::fmt;

/// Every accepted poem in `sentence`, in order of starting phrase.
///
/// Windows are tried at every phrase; overlapping poems are all kept.
pub fn extract_poems(sentence: &Sentence) -> Vec<Poem<'_>> {
    find_windows(sentence.phrases())
        .into_iter()
        .filter_map(|window| {
            let poem = Poem::from_window(sentence, &window);
            match classify(&poem) {
                Ok(()) => Some(poem),
                Err(rejection) => {
                    trace!("Rejected candidate {:?}: {}", poem.lines(), rejection);
                    None
                }
            }
        })
        .collect()
}

/// Why a sentence produced no analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The text has characters outside hiragana, katakana, kanji and 、「」
    Ineligible,
    /// A morpheme reading is not pure hiragana
    InvalidReading(InvalidReadingError),
    /// The analyzer produced a phrase without morphemes
    EmptyPhrase {
        /// Position of the phrase in the sentence
        index: usize,
    },
    /// The analyzer output for this sentence is unusable
    Malformed(MalformedOutput),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Ineligible => write!(f, "contains ineligible characters"),
            SkipReason::InvalidReading(err) => write!(f, "{err}"),
            SkipReason::EmptyPhrase { index } => write!(f, "phrase {index} has no morphemes"),
            SkipReason::Malformed(err) => write!(f, "malformed analysis: {err}"),
        }
    }
}

impl From<SentenceError> for SkipReason {
    fn from(err: SentenceError) -> Self {
        match err {
            SentenceError::InvalidReading(err) => SkipReason::InvalidReading(err),
            SentenceError::EmptyPhrase { index } => SkipReason::EmptyPhrase { index },
        }
    }
}

/// Result of processing one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The sentence was analyzed; the list may be empty
    Analyzed(Vec<OwnedPoem>),
    /// The sentence was passed over
    Skipped(SkipReason),
}

impl Outcome {
    /// Accepted poems, empty when skipped
    pub fn poems(&self) -> &[OwnedPoem] {
        match self {
            Outcome::Analyzed(poems) => poems,
            Outcome::Skipped(_) => &[],
        }
    }

    /// Takes the accepted poems
    pub fn into_poems(self) -> Vec<OwnedPoem> {
        match self {
            Outcome::Analyzed(poems) => poems,
            Outcome::Skipped(_) => Vec::new(),
        }
    }

    /// Whether the sentence was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }
}

/// Runs sentences through an analyzer and extracts poems
#[derive(Debug, Clone)]
pub struct Extractor<A> {
    analyzer: A,
}

impl<A: Analyzer> Extractor<A> {
    /// Creates an extractor using `analyzer`
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// The underlying analyzer
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Processes one sentence.
    ///
    /// Ineligible text is skipped without calling the analyzer. Only an
    /// unusable analyzer is an error.
    pub fn process(&self, text: &str) -> Result<Outcome> {
        if !is_eligible(text) {
            debug!("Skipping {:?}: {}", text, SkipReason::Ineligible);
            return Ok(Outcome::Skipped(SkipReason::Ineligible));
        }
        let analysis = self.analyzer.analyze(text)?;
        Ok(outcome_of(text, analysis))
    }

    /// Accepted poems of one sentence; skipped sentences yield none
    pub fn extract_from_text(&self, text: &str) -> Result<Vec<OwnedPoem>> {
        Ok(self.process(text)?.into_poems())
    }

    /// Processes several sentences with a single analyzer call.
    ///
    /// Outcomes are in input order. Ineligible texts are never sent.
    pub fn process_batch(&self, texts: &[&str]) -> Result<Vec<Outcome>> {
        let mut outcomes: Vec<Option<Outcome>> = texts
            .iter()
            .map(|text| {
                if is_eligible(text) {
                    None
                } else {
                    debug!("Skipping {:?}: {}", text, SkipReason::Ineligible);
                    Some(Outcome::Skipped(SkipReason::Ineligible))
                }
            })
            .collect();

        let eligible: Vec<&str> = texts
            .iter()
            .zip(&outcomes)
            .filter(|(_, outcome)| outcome.is_none())
            .map(|(text, _)| *text)
            .collect();

        if !eligible.is_empty() {
            let analyses = self.analyzer.analyze_batch(&eligible)?;
            if analyses.len() != eligible.len() {
                return Err(AnalyzerError::SentenceCount {
                    expected: eligible.len(),
                    actual: analyses.len(),
                }
                .into());
            }
            let mut results = eligible
                .iter()
                .zip(analyses)
                .map(|(text, analysis)| outcome_of(text, analysis));
            for slot in outcomes.iter_mut().filter(|slot| slot.is_none()) {
                *slot = results.next();
            }
        }

        Ok(outcomes.into_iter().flatten().collect())
    }

    /// Accepted poems of several sentences, in input order
    pub fn extract_batch(&self, texts: &[&str]) -> Result<Vec<OwnedPoem>> {
        Ok(self
            .process_batch(texts)?
            .into_iter()
            .flat_map(Outcome::into_poems)
            .collect())
    }
}

fn outcome_of(text: &str, analysis: Analysis) -> Outcome {
    let phrases = match analysis {
        Ok(phrases) => phrases,
        Err(err) => {
            let reason = SkipReason::Malformed(err);
            debug!("Skipping {:?}: {}", text, reason);
            return Outcome::Skipped(reason);
        }
    };

    match Sentence::from_tokens(text, phrases) {
        Ok(sentence) => {
            let poems: Vec<OwnedPoem> = extract_poems(&sentence)
                .iter()
                .map(Poem::to_owned_poem)
                .collect();
            if !poems.is_empty() {
                debug!("Found {} poems in {:?}", poems.len(), text);
            }
            Outcome::Analyzed(poems)
        }
        Err(err) => {
            let reason = SkipReason::from(err);
            debug!("Skipping {:?}: {}", text, reason);
            Outcome::Skipped(reason)
        }
    }
}
