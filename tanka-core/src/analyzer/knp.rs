//! Reader for the KNP tab format (`knp -tab`)
//!
//! ```text
//! # S-ID:1 KNP:5.0
//! * 1D <...>
//! + 1D <...>
//! 白玉 しらたま 白玉 名詞 6 普通名詞 1 * 0 * 0 "代表表記:白玉/しらたま"
//! の の の 助詞 9 接続助詞 3 * 0 * 0 NIL
//! * -1D <...>
//! ...
//! EOS
//! ```
//!
//! `*` opens a phrase (bunsetsu), `+` lines describe basic phrases and are
//! ignored, as are `@` alternative readings and `#` comments. Every other line
//! is a morpheme: surface, reading, base form, part-of-speech and its id,
//! sub-category and its id, conjugation type and its id, conjugation form and
//! its id, then free-form features.

use super::{Analysis, MalformedOutput};
use crate::morpheme::Token;
use crate::tags::{ConjugationForms, PartOfSpeech, PosSubcategory, UnknownTag};

/// Sentence terminator
pub const EOS: &str = "EOS";

/// Fields a morpheme line must carry
pub const MORPHEME_FIELDS: usize = 11;

const SURFACE: usize = 0;
const READING: usize = 1;
const POS: usize = 3;
const POS_SUB: usize = 5;
const CONJUGATION_FORM: usize = 9;

/// Parses one morpheme line
pub fn parse_morpheme(line: &str, line_no: usize) -> Result<Token, MalformedOutput> {
    let fields: Vec<&str> = line.splitn(MORPHEME_FIELDS + 1, ' ').collect();
    if fields.len() < MORPHEME_FIELDS {
        return Err(MalformedOutput::MissingFields {
            line: line_no,
            expected: MORPHEME_FIELDS,
            found: fields.len(),
        });
    }

    let tag_error = |source: UnknownTag| MalformedOutput::UnknownTag {
        line: line_no,
        source,
    };
    let pos: PartOfSpeech = fields[POS].parse().map_err(tag_error)?;
    let pos_sub: PosSubcategory = fields[POS_SUB].parse().map_err(tag_error)?;
    let conjugation = ConjugationForms::from_label(fields[CONJUGATION_FORM]).map_err(tag_error)?;

    Ok(Token {
        surface: fields[SURFACE].to_string(),
        reading: fields[READING].to_string(),
        pos,
        pos_sub,
        conjugation,
    })
}

/// Incremental reader that collects one sentence at a time
#[derive(Debug, Default)]
struct SentenceReader {
    phrases: Vec<Vec<Token>>,
    // line of the most recent phrase header
    phrase_line: usize,
    error: Option<MalformedOutput>,
}

impl SentenceReader {
    fn feed(&mut self, line: &str, line_no: usize) {
        if self.error.is_some() {
            return;
        }
        if line.is_empty()
            || line.starts_with('#')
            || line.starts_with("+ ")
            || line.starts_with("@ ")
        {
            return;
        }
        if line == "*" || line.starts_with("* ") {
            if let Err(err) = self.close_phrase() {
                self.error = Some(err);
                return;
            }
            self.phrases.push(Vec::new());
            self.phrase_line = line_no;
            return;
        }

        match self.phrases.last_mut() {
            None => self.error = Some(MalformedOutput::MorphemeOutsidePhrase { line: line_no }),
            Some(phrase) => match parse_morpheme(line, line_no) {
                Ok(token) => phrase.push(token),
                Err(err) => self.error = Some(err),
            },
        }
    }

    fn close_phrase(&self) -> Result<(), MalformedOutput> {
        match self.phrases.last() {
            Some(phrase) if phrase.is_empty() => Err(MalformedOutput::EmptyPhrase {
                line: self.phrase_line,
            }),
            _ => Ok(()),
        }
    }

    fn finish(&mut self) -> Analysis {
        let reader = std::mem::take(self);
        if let Some(err) = reader.error {
            return Err(err);
        }
        reader.close_phrase()?;
        Ok(reader.phrases)
    }
}

/// Splits a KNP document into per-sentence analyses.
///
/// A malformed sentence does not affect its neighbours. Trailing lines
/// without an `EOS` yield a final [`MalformedOutput::Unterminated`] entry.
pub fn parse_document(output: &str) -> Vec<Analysis> {
    let mut analyses = Vec::new();
    let mut reader = SentenceReader::default();
    let mut pending = false;

    for (index, line) in output.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line == EOS {
            analyses.push(reader.finish());
            pending = false;
            continue;
        }
        if !line.trim().is_empty() {
            pending = true;
        }
        reader.feed(line, index + 1);
    }

    if pending {
        analyses.push(Err(MalformedOutput::Unterminated));
    }
    analyses
}

/// Surface text of an analysis: every token surface concatenated
pub fn surface_text(phrases: &[Vec<Token>]) -> String {
    phrases
        .iter()
        .flatten()
        .map(|token| token.surface.as_str())
        .collect()
}
