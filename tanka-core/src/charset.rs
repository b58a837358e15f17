//! Character-class gate applied before a sentence reaches the analyzer

use regex::Regex;
use std::sync::OnceLock;

fn eligible_sentence() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[\p{sc=Hiragana}\p{sc=Katakana}\p{sc=Han}、「」]+$")
            .expect("sentence character class is valid")
    })
}

/// Whether every character of `text` is hiragana, katakana, a CJK ideograph,
/// `、`, `「` or `」`.
///
/// Empty text is not eligible.
pub fn is_eligible(text: &str) -> bool {
    eligible_sentence().is_match(text)
}
