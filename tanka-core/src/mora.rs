//! Mora accounting for phonetic readings
//!
//! A reading is written in hiragana. Every character is one beat except the
//! small kana that fuse with the preceding syllable (きゃ, ふぁ) and the
//! bracket/comma marks the analyzer uses as readings of punctuation.
//! The small っ is a beat of its own and is not discounted.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Characters that do not add a beat of their own
pub const DISCOUNTED: [char; 19] = [
    'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', //
    'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', //
    '、', '「', '」',
];

/// A reading containing something other than hiragana and the allowed marks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reading {reading:?} contains non-hiragana character {offending:?}")]
pub struct InvalidReadingError {
    /// The rejected reading
    pub reading: String,
    /// First character outside the accepted set
    pub offending: char,
}

fn non_reading_char() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[^\p{sc=Hiragana}、「」]").expect("reading character class is valid")
    })
}

/// Counts the morae of a hiragana reading.
///
/// The result is the character count minus the number of [`DISCOUNTED`]
/// characters. An empty reading has zero morae.
pub fn count_mora(reading: &str) -> Result<u32, InvalidReadingError> {
    if let Some(found) = non_reading_char().find(reading) {
        // find() always matches exactly one character
        let offending = found.as_str().chars().next().unwrap_or_default();
        return Err(InvalidReadingError {
            reading: reading.to_string(),
            offending,
        });
    }

    let (total, discounted) = reading.chars().fold((0u32, 0u32), |(total, small), ch| {
        (total + 1, small + u32::from(DISCOUNTED.contains(&ch)))
    });
    Ok(total - discounted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_hiragana_counts_every_character() {
        assert_eq!(count_mora("さくら"), Ok(3));
        assert_eq!(count_mora("しらたま"), Ok(4));
    }

    #[test]
    fn test_small_kana_do_not_add_beats() {
        assert_eq!(count_mora("きゃく"), Ok(2));
        assert_eq!(count_mora("ちょうちょ"), Ok(3));
        assert_eq!(count_mora("ふぁいと"), Ok(3));
    }

    #[test]
    fn test_small_tsu_is_a_full_beat() {
        assert_eq!(count_mora("がっこう"), Ok(4));
        assert_eq!(count_mora("きっぷ"), Ok(3));
    }

    #[test]
    fn test_bracket_and_comma_readings_are_free() {
        assert_eq!(count_mora("「"), Ok(0));
        assert_eq!(count_mora("」"), Ok(0));
        assert_eq!(count_mora("、"), Ok(0));
        assert_eq!(count_mora("「あ」"), Ok(1));
    }

    #[test]
    fn test_empty_reading() {
        assert_eq!(count_mora(""), Ok(0));
    }

    #[test]
    fn test_rejects_katakana() {
        let err = count_mora("トンネル").unwrap_err();
        assert_eq!(err.offending, 'ト');
        assert_eq!(err.reading, "トンネル");
    }

    #[test]
    fn test_rejects_mixed_scripts() {
        assert_eq!(count_mora("あい1").unwrap_err().offending, '1');
        assert_eq!(count_mora("ab").unwrap_err().offending, 'a');
        assert_eq!(count_mora("やま川").unwrap_err().offending, '川');
        // the long vowel mark belongs to no kana script
        assert_eq!(count_mora("らーめん").unwrap_err().offending, 'ー');
        assert!(count_mora("。").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = count_mora("アイ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "reading \"アイ\" contains non-hiragana character 'ア'"
        );
    }
}
