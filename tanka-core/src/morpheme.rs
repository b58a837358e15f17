//! Analyzed sentence structure: tokens, morphemes, phrases and sentences
//!
//! [`Token`] is what the analyzer hands over. [`Morpheme`] is the same word
//! with its reading already reduced to a mora count, which is all the pattern
//! extraction needs. Phrases and sentences are read-only once built.

use crate::mora::{count_mora, InvalidReadingError};
use crate::tags::{ConjugationForms, PartOfSpeech, PosSubcategory};
use smallvec::SmallVec;
use thiserror::Error;

/// One morpheme exactly as reported by the analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Literal text form
    pub surface: String,
    /// Phonetic reading in hiragana
    pub reading: String,
    /// Part-of-speech
    pub pos: PartOfSpeech,
    /// Part-of-speech sub-category
    pub pos_sub: PosSubcategory,
    /// Conjugation forms, empty for words that do not inflect
    pub conjugation: ConjugationForms,
}

impl Token {
    /// Creates a token for a non-inflecting word
    pub fn new(
        surface: impl Into<String>,
        reading: impl Into<String>,
        pos: PartOfSpeech,
        pos_sub: PosSubcategory,
    ) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            pos,
            pos_sub,
            conjugation: ConjugationForms::empty(),
        }
    }

    /// Sets the conjugation forms
    pub fn with_conjugation(mut self, conjugation: impl Into<ConjugationForms>) -> Self {
        self.conjugation = conjugation.into();
        self
    }
}

/// A morpheme annotated with its mora count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    surface: String,
    mora_count: u32,
    pos: PartOfSpeech,
    pos_sub: PosSubcategory,
    conjugation_forms: ConjugationForms,
}

impl Morpheme {
    /// Derives the mora count from the token's reading
    pub fn from_token(token: Token) -> Result<Self, InvalidReadingError> {
        let mora_count = count_mora(&token.reading)?;
        Ok(Self {
            surface: token.surface,
            mora_count,
            pos: token.pos,
            pos_sub: token.pos_sub,
            conjugation_forms: token.conjugation,
        })
    }

    /// Literal text form
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Number of beats this morpheme contributes
    pub fn mora_count(&self) -> u32 {
        self.mora_count
    }

    /// Part-of-speech
    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// Part-of-speech sub-category
    pub fn pos_sub(&self) -> PosSubcategory {
        self.pos_sub
    }

    /// Applicable conjugation forms
    pub fn conjugation_forms(&self) -> ConjugationForms {
        self.conjugation_forms
    }
}

/// A phrase (bunsetsu): a non-empty run of morphemes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    morphemes: SmallVec<[Morpheme; 4]>,
    mora_count: u32,
}

impl Phrase {
    /// Builds a phrase, or `None` when there are no morphemes
    pub fn new(morphemes: impl IntoIterator<Item = Morpheme>) -> Option<Self> {
        let morphemes: SmallVec<[Morpheme; 4]> = morphemes.into_iter().collect();
        if morphemes.is_empty() {
            return None;
        }
        let mora_count = morphemes.iter().map(Morpheme::mora_count).sum();
        Some(Self {
            morphemes,
            mora_count,
        })
    }

    /// Morphemes in order
    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    /// Total morae of the phrase
    pub fn mora_count(&self) -> u32 {
        self.mora_count
    }

    /// First morpheme
    pub fn first(&self) -> &Morpheme {
        &self.morphemes[0]
    }

    /// Last morpheme
    pub fn last(&self) -> &Morpheme {
        &self.morphemes[self.morphemes.len() - 1]
    }

    /// Concatenated surface forms
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(Morpheme::surface).collect()
    }
}

/// Why analyzer tokens could not be turned into a [`Sentence`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    /// A morpheme reading was not pure hiragana
    #[error(transparent)]
    InvalidReading(#[from] InvalidReadingError),

    /// The analyzer produced a phrase without morphemes
    #[error("phrase {index} has no morphemes")]
    EmptyPhrase {
        /// Position of the phrase in the sentence
        index: usize,
    },
}

/// A sentence: its original text and the analyzer's phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    phrases: Vec<Phrase>,
}

impl Sentence {
    /// Wraps already-built phrases
    pub fn new(text: impl Into<String>, phrases: Vec<Phrase>) -> Self {
        Self {
            text: text.into(),
            phrases,
        }
    }

    /// Converts analyzer output into a sentence.
    ///
    /// Fails on the first reading that is not hiragana; no partial sentence
    /// is produced.
    pub fn from_tokens(
        text: impl Into<String>,
        phrases: Vec<Vec<Token>>,
    ) -> Result<Self, SentenceError> {
        let phrases = phrases
            .into_iter()
            .enumerate()
            .map(|(index, tokens)| {
                let morphemes = tokens
                    .into_iter()
                    .map(Morpheme::from_token)
                    .collect::<Result<Vec<_>, _>>()?;
                Phrase::new(morphemes).ok_or(SentenceError::EmptyPhrase { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(text, phrases))
    }

    /// Original text, used for reporting only
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Phrases in analyzer order
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Total morae across all phrases
    pub fn mora_count(&self) -> u32 {
        self.phrases.iter().map(Phrase::mora_count).sum()
    }
}
