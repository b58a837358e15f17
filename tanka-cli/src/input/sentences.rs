//! Splitting prose into the sentences sent to the analyzer

/// Japanese full stop
pub const FULL_STOP: char = '。';

/// Splits text into sentences: each line is trimmed and cut at every `。`.
///
/// Empty pieces are dropped. Pieces are otherwise kept as they are; whether
/// they are usable is decided later by the character gate.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.lines()
        .flat_map(|line| line.trim().split(FULL_STOP))
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_full_stop() {
        let text = "春が来た。夏も来た。\n  秋の夜の酒。  \n\n冬";
        assert_eq!(
            split_sentences(text),
            vec!["春が来た", "夏も来た", "秋の夜の酒", "冬"]
        );
    }

    #[test]
    fn test_repeated_stops_and_blank_lines() {
        assert_eq!(split_sentences("。。春。。\n\n"), vec!["春"]);
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_inner_spaces_are_kept() {
        assert_eq!(split_sentences("春 が来た。"), vec!["春 が来た"]);
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(split_sentences("春。\r\n秋。\r\n"), vec!["春", "秋"]);
    }
}
