//! Poems carved out of a sentence

use crate::morpheme::{Morpheme, Phrase, Sentence};
use crate::pattern::CandidateWindow;
use serde::Serialize;

/// One verse line: a non-empty run of phrases
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    phrases: &'a [Phrase],
}

impl<'a> Segment<'a> {
    fn new(phrases: &'a [Phrase]) -> Self {
        debug_assert!(!phrases.is_empty(), "verse lines always hold a phrase");
        Self { phrases }
    }

    /// Phrases of this line
    pub fn phrases(&self) -> &'a [Phrase] {
        self.phrases
    }

    /// Total morae of this line
    pub fn mora_count(&self) -> u32 {
        self.phrases.iter().map(Phrase::mora_count).sum()
    }

    /// First morpheme of the first phrase
    pub fn first_morpheme(&self) -> &'a Morpheme {
        self.phrases[0].first()
    }

    /// Last morpheme of the last phrase
    pub fn last_morpheme(&self) -> &'a Morpheme {
        self.phrases[self.phrases.len() - 1].last()
    }

    /// Concatenated surface forms
    pub fn text(&self) -> String {
        self.phrases.iter().map(Phrase::surface).collect()
    }
}

/// Five verse lines borrowed from a sentence
#[derive(Debug, Clone, Copy)]
pub struct Poem<'a> {
    segments: [Segment<'a>; 5],
    sentence: &'a str,
}

impl<'a> Poem<'a> {
    /// Slices the window's phrases out of `sentence`
    pub fn from_window(sentence: &'a Sentence, window: &CandidateWindow) -> Self {
        let phrases = sentence.phrases();
        Self {
            segments: std::array::from_fn(|line| Segment::new(&phrases[window.line_range(line)])),
            sentence: sentence.text(),
        }
    }

    /// The five verse lines in order
    pub fn segments(&self) -> &[Segment<'a>; 5] {
        &self.segments
    }

    /// Text of the source sentence
    pub fn sentence(&self) -> &'a str {
        self.sentence
    }

    /// Every surface form of the poem, without separators
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Each verse line rendered separately
    pub fn lines(&self) -> [String; 5] {
        self.segments.map(|segment| segment.text())
    }

    /// Detaches the poem from the sentence it was found in
    pub fn to_owned_poem(&self) -> OwnedPoem {
        OwnedPoem {
            poem: self.text(),
            sentence: self.sentence.to_string(),
            lines: self.lines(),
        }
    }
}

/// An accepted poem as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedPoem {
    /// Concatenated surface forms of all five lines
    pub poem: String,
    /// The sentence the poem was found in
    pub sentence: String,
    /// The five verse lines
    pub lines: [String; 5],
}
