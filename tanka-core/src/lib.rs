//! Finding 5-7-5-7-7 tanka hidden in ordinary Japanese sentences
//!
//! Sentences are first analyzed into phrases (bunsetsu) and morphemes by an
//! external morphological analyzer. Each morpheme reading is reduced to a
//! mora count, and every run of phrases whose running totals land exactly on
//! 5, 12, 17, 24 and 31 morae becomes a candidate. Candidates are then
//! filtered by part-of-speech and conjugation heuristics at the opening, the
//! end of the upper verse and the end of the poem.
//!
//! # Architecture
//!
//! - **Mora accounting**: [`mora`], [`charset`]
//! - **Analyzed text model**: [`tags`], [`morpheme`]
//! - **Extraction**: [`pattern`], [`poem`], [`classifier`], [`extractor`]
//! - **Analyzer seam**: [`analyzer`] (KNP tab reader, `jumanpp | knp`
//!   pipeline, pre-analyzed documents)
//! - **Fan-out**: [`batch`]
//!
//! # Example
//!
//! ```rust
//! use tanka_core::{count_mora, Extractor, Preanalyzed};
//!
//! assert_eq!(count_mora("きゃく").unwrap(), 2);
//!
//! let knp = "\
//! * -1D
//! 春 はる 春 名詞 6 時相名詞 10 * 0 * 0
//! EOS
//! ";
//! let extractor = Extractor::new(Preanalyzed::from_knp(knp));
//! let poems = extractor.extract_from_text("春").unwrap();
//! assert!(poems.is_empty());
//! ```

pub mod analyzer;
pub mod batch;
pub mod charset;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod mora;
pub mod morpheme;
pub mod pattern;
pub mod poem;
pub mod tags;

pub use analyzer::{Analysis, Analyzer, AnalyzerError, KnpCommand, MalformedOutput, Preanalyzed};
pub use batch::{extract_parallel, BatchConfig, BatchReport, BatchStats};
pub use charset::is_eligible;
pub use classifier::{accepts, Rejection};
pub use error::{ExtractError, Result};
pub use extractor::{extract_poems, Extractor, Outcome, SkipReason};
pub use mora::{count_mora, InvalidReadingError};
pub use morpheme::{Morpheme, Phrase, Sentence, SentenceError, Token};
pub use pattern::{cumulative_sums, detect_window, CandidateWindow, PrefixSums, TANKA_BOUNDARIES};
pub use poem::{OwnedPoem, Poem, Segment};
pub use tags::{ConjugationForm, ConjugationForms, PartOfSpeech, PosSubcategory, UnknownTag};
