//! Analyzer backed by KNP output that was produced ahead of time

use super::{knp, Analysis, Analyzer, AnalyzerError, MalformedOutput};
use crate::morpheme::Token;
use log::warn;
use std::collections::HashMap;

/// Looks sentences up in a parsed KNP document.
///
/// The key of each entry is the concatenation of its surface forms, which
/// is the sentence text the analyzer was given.
#[derive(Debug, Clone, Default)]
pub struct Preanalyzed {
    entries: HashMap<String, Vec<Vec<Token>>>,
    sentences: Vec<String>,
    malformed: usize,
}

impl Preanalyzed {
    /// Parses a KNP tab document. Malformed sentences are counted and left
    /// out.
    pub fn from_knp(document: &str) -> Self {
        let mut preanalyzed = Self::default();
        for (index, analysis) in knp::parse_document(document).into_iter().enumerate() {
            match analysis {
                Ok(phrases) => preanalyzed.insert(phrases),
                Err(err) => {
                    warn!("Skipping analyzed sentence {}: {}", index + 1, err);
                    preanalyzed.malformed += 1;
                }
            }
        }
        preanalyzed
    }

    /// Adds one analyzed sentence, keyed by its surface text
    pub fn insert(&mut self, phrases: Vec<Vec<Token>>) {
        let text = knp::surface_text(&phrases);
        self.sentences.push(text.clone());
        self.entries.insert(text, phrases);
    }

    /// Sentence texts in document order, duplicates included
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Number of sentences dropped as malformed
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    /// Number of distinct sentences available
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sentence is available
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Analyzer for Preanalyzed {
    fn analyze(&self, text: &str) -> Result<Analysis, AnalyzerError> {
        Ok(self
            .entries
            .get(text)
            .cloned()
            .ok_or_else(|| MalformedOutput::NotAnalyzed(text.to_string())))
    }

    fn name(&self) -> &'static str {
        "preanalyzed"
    }
}
