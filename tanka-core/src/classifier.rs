//! Boundary heuristics separating verse from accidental 31-mora runs
//!
//! Three places of a candidate are inspected:
//! - the very first morpheme must not be a particle or the copula;
//! - the end of the third line (the upper verse) must close grammatically:
//!   a particle, a special symbol, or a word in base form;
//! - the end of the poem must look sentence-final: a suffix, the copula, a
//!   sentence-final particle, or a word in base or past form.

use crate::poem::Poem;
use crate::tags::{ConjugationForm, PartOfSpeech, PosSubcategory};
use std::fmt;

const FORBIDDEN_OPENING: [PartOfSpeech; 2] = [PartOfSpeech::Particle, PartOfSpeech::Copula];
const MID_VERSE_POS: [PartOfSpeech; 2] = [PartOfSpeech::Particle, PartOfSpeech::Special];
const ENDING_POS: [PartOfSpeech; 2] = [PartOfSpeech::Suffix, PartOfSpeech::Copula];
const ENDING_FORMS: [ConjugationForm; 2] = [ConjugationForm::Base, ConjugationForm::Past];

/// The heuristic that turned a candidate down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The poem opens on a particle or the copula
    Opening,
    /// The upper verse does not end on a closed unit
    MidVerse,
    /// The poem does not end in a sentence-final shape
    Ending,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Opening => write!(f, "opens on a particle or copula"),
            Rejection::MidVerse => write!(f, "upper verse ends mid-clause"),
            Rejection::Ending => write!(f, "does not end sentence-finally"),
        }
    }
}

/// First morpheme of the first line is neither a particle nor the copula
pub fn opening_ok(poem: &Poem<'_>) -> bool {
    let first = poem.segments()[0].first_morpheme();
    !FORBIDDEN_OPENING.contains(&first.pos())
}

/// Last morpheme of the third line is a particle or symbol, or in base form
pub fn mid_verse_ok(poem: &Poem<'_>) -> bool {
    let last = poem.segments()[2].last_morpheme();
    MID_VERSE_POS.contains(&last.pos()) || last.conjugation_forms().contains(ConjugationForm::Base)
}

/// Last morpheme of the fifth line is a suffix, the copula, a sentence-final
/// particle, or in base or past form
pub fn ending_ok(poem: &Poem<'_>) -> bool {
    let last = poem.segments()[4].last_morpheme();
    ENDING_POS.contains(&last.pos())
        || last.pos_sub() == PosSubcategory::SentenceFinalParticle
        || last.conjugation_forms().intersects(&ENDING_FORMS)
}

/// Checks all three heuristics, reporting the first that fails
pub fn classify(poem: &Poem<'_>) -> Result<(), Rejection> {
    if !opening_ok(poem) {
        return Err(Rejection::Opening);
    }
    if !mid_verse_ok(poem) {
        return Err(Rejection::MidVerse);
    }
    if !ending_ok(poem) {
        return Err(Rejection::Ending);
    }
    Ok(())
}

/// Whether the candidate is accepted as a poem
pub fn accepts(poem: &Poem<'_>) -> bool {
    classify(poem).is_ok()
}
