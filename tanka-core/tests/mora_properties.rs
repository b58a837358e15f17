//! Property-based tests for mora counting and window detection

use proptest::prelude::*;
use tanka_core::mora::DISCOUNTED;
use tanka_core::{count_mora, detect_window, is_eligible, TANKA_BOUNDARIES};

fn arb_reading_char() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => prop::sample::select("あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんがぎぐげござじずぜぞだでどばびぶべぼっ".chars().collect::<Vec<_>>()),
        2 => prop::sample::select(vec!['ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ']),
        1 => prop::sample::select(vec!['、', '「', '」']),
    ]
}

fn arb_reading() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_reading_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn mora_count_is_length_minus_discounts(reading in arb_reading()) {
        let discounted = reading.chars().filter(|c| DISCOUNTED.contains(c)).count();
        let count = count_mora(&reading).unwrap();
        prop_assert_eq!(count as usize, reading.chars().count() - discounted);
    }

    #[test]
    fn mora_count_never_exceeds_length(reading in arb_reading()) {
        prop_assert!(count_mora(&reading).unwrap() as usize <= reading.chars().count());
    }

    #[test]
    fn katakana_or_digit_is_rejected(
        prefix in arb_reading(),
        bad in prop::sample::select(vec!['カ', 'ア', 'ー', '7', 'a', '山', '。']),
        suffix in arb_reading(),
    ) {
        let reading = format!("{prefix}{bad}{suffix}");
        let err = count_mora(&reading).unwrap_err();
        prop_assert_eq!(err.offending, bad);
    }

    #[test]
    fn hiragana_text_is_eligible(reading in arb_reading()) {
        prop_assert_eq!(is_eligible(&reading), !reading.is_empty());
    }

    #[test]
    fn windows_split_at_line_boundaries(padding in prop::collection::vec(0u32..3, 5)) {
        // each line: one phrase of the line's morae minus padding, then the padding
        let mut per_phrase = Vec::new();
        for (line, pad) in [5u32, 7, 5, 7, 7].into_iter().zip(&padding) {
            per_phrase.push(line - pad);
            per_phrase.push(*pad);
        }
        let cumulative: Vec<u32> = per_phrase
            .iter()
            .scan(0, |total, morae| {
                *total += morae;
                Some(*total)
            })
            .collect();

        let window = detect_window(0, &cumulative).unwrap();
        prop_assert_eq!(window.ends, [2, 4, 6, 8, 10]);
        for (line, target) in TANKA_BOUNDARIES.iter().enumerate() {
            prop_assert_eq!(cumulative[window.ends[line] - 1], *target);
        }
    }
}
