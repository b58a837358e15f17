//! Cumulative mora sums and 5-7-5-7-7 window detection
//!
//! A window starting at phrase `s` exists when the running mora totals of
//! phrases `s, s+1, ...` hit every value of [`TANKA_BOUNDARIES`] exactly at a
//! phrase boundary. Each verse line ends at the *last* phrase whose running
//! total equals the line's boundary value, so zero-mora phrases that follow a
//! boundary are credited to the line they close rather than the next one.

use crate::morpheme::Phrase;
use std::ops::Range;

/// Morae per verse line
pub const LINE_MORAE: [u32; 5] = [5, 7, 5, 7, 7];

/// Running totals at the end of each verse line
pub const TANKA_BOUNDARIES: [u32; 5] = [5, 12, 17, 24, 31];

/// Morae of a complete poem
pub const TANKA_MORAE: u32 = TANKA_BOUNDARIES[4];

/// Running mora totals of `phrases`: entry `k` is the sum over phrases `0..=k`.
pub fn cumulative_sums(phrases: &[Phrase]) -> Vec<u32> {
    phrases
        .iter()
        .scan(0u32, |total, phrase| {
            *total += phrase.mora_count();
            Some(*total)
        })
        .collect()
}

/// Prefix sums over a whole sentence, from which the running totals of any
/// suffix are derived by subtraction.
#[derive(Debug, Clone)]
pub struct PrefixSums {
    // prefix[k] = morae of phrases 0..k
    prefix: Vec<u32>,
}

impl PrefixSums {
    /// Computes the prefix sums of a sentence's phrases
    pub fn new(phrases: &[Phrase]) -> Self {
        let mut prefix = Vec::with_capacity(phrases.len() + 1);
        prefix.push(0);
        prefix.extend(cumulative_sums(phrases));
        Self { prefix }
    }

    /// Number of phrases covered
    pub fn len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Whether there are no phrases
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Running totals of the phrases from `start` onwards.
    ///
    /// Equal to `cumulative_sums(&phrases[start..])`.
    pub fn suffix(&self, start: usize) -> impl Iterator<Item = u32> + '_ {
        let base = self.prefix[start];
        self.prefix[start + 1..].iter().map(move |&sum| sum - base)
    }

    /// Running totals from `start`, cut off once they exceed a full poem.
    ///
    /// Totals never decrease, so nothing past the first value above
    /// [`TANKA_MORAE`] can match a boundary.
    pub fn window_prefix(&self, start: usize) -> Vec<u32> {
        self.suffix(start)
            .take_while(|&sum| sum <= TANKA_MORAE)
            .collect()
    }
}

/// A run of phrases whose running totals hit all five boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateWindow {
    /// Index of the first phrase within the sentence
    pub start: usize,
    /// End of each verse line, relative to `start` (exclusive)
    pub ends: [usize; 5],
}

impl CandidateWindow {
    /// The six boundary points `0, ends[0], ..., ends[4]`, relative to `start`
    pub fn boundaries(&self) -> [usize; 6] {
        let mut points = [0; 6];
        points[1..].copy_from_slice(&self.ends);
        points
    }

    /// Absolute phrase range of verse line `line` (0-based)
    pub fn line_range(&self, line: usize) -> Range<usize> {
        let points = self.boundaries();
        self.start + points[line]..self.start + points[line + 1]
    }

    /// Absolute phrase range of the whole window
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.ends[4]
    }

    /// Number of phrases in each verse line
    pub fn phrase_counts(&self) -> [usize; 5] {
        let points = self.boundaries();
        std::array::from_fn(|line| points[line + 1] - points[line])
    }
}

/// Position of the last exact occurrence of each boundary value in
/// `cumulative`, or `None` if any boundary value is missing.
pub fn boundary_positions(cumulative: &[u32]) -> Option<[usize; 5]> {
    let mut positions = [0; 5];
    for (slot, target) in positions.iter_mut().zip(TANKA_BOUNDARIES) {
        *slot = cumulative.iter().rposition(|&sum| sum == target)?;
    }
    Some(positions)
}

/// Detects a window at `start` from the running totals of the phrases
/// beginning there.
pub fn detect_window(start: usize, cumulative: &[u32]) -> Option<CandidateWindow> {
    let positions = boundary_positions(cumulative)?;
    Some(CandidateWindow {
        start,
        ends: positions.map(|position| position + 1),
    })
}

/// Every window in a sentence, in order of starting phrase.
///
/// Windows may overlap; all of them are reported.
pub fn find_windows(phrases: &[Phrase]) -> Vec<CandidateWindow> {
    let sums = PrefixSums::new(phrases);
    (0..sums.len())
        .filter_map(|start| detect_window(start, &sums.window_prefix(start)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::{Morpheme, Token};
    use crate::tags::{PartOfSpeech, PosSubcategory};

    fn phrases_with_morae(counts: &[u32]) -> Vec<Phrase> {
        counts
            .iter()
            .map(|&count| {
                let reading = "あ".repeat(count as usize);
                let token = Token::new(
                    reading.clone(),
                    reading,
                    PartOfSpeech::Noun,
                    PosSubcategory::CommonNoun,
                );
                Phrase::new([Morpheme::from_token(token).unwrap()]).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_cumulative_sums() {
        let phrases = phrases_with_morae(&[2, 3, 7, 5, 7, 2, 5]);
        assert_eq!(cumulative_sums(&phrases), vec![2, 5, 12, 17, 24, 26, 31]);
        assert!(cumulative_sums(&[]).is_empty());
    }

    #[test]
    fn test_suffix_matches_recomputed_sums() {
        let phrases = phrases_with_morae(&[1, 0, 4, 7, 5, 0, 7, 7, 3]);
        let sums = PrefixSums::new(&phrases);
        assert_eq!(sums.len(), phrases.len());
        for start in 0..phrases.len() {
            let derived: Vec<u32> = sums.suffix(start).collect();
            assert_eq!(derived, cumulative_sums(&phrases[start..]), "start {start}");
        }
    }

    #[test]
    fn test_window_prefix_stops_after_full_poem() {
        let phrases = phrases_with_morae(&[5, 7, 5, 7, 7, 0, 3]);
        let sums = PrefixSums::new(&phrases);
        assert_eq!(sums.window_prefix(0), vec![5, 12, 17, 24, 31, 31]);
    }

    #[test]
    fn test_reference_boundary_positions() {
        let cumulative = [2, 5, 12, 17, 24, 26, 31];
        assert_eq!(boundary_positions(&cumulative), Some([1, 2, 3, 4, 6]));

        let window = detect_window(0, &cumulative).unwrap();
        assert_eq!(window.boundaries(), [0, 2, 3, 4, 5, 7]);
        assert_eq!(window.phrase_counts(), [2, 1, 1, 1, 2]);
    }

    #[test]
    fn test_missing_boundary_means_no_window() {
        // jumps from 10 to 14, never 12
        assert_eq!(detect_window(0, &[5, 10, 14, 17, 24, 31]), None);
        assert_eq!(detect_window(0, &[]), None);
    }

    #[test]
    fn test_last_occurrence_wins_on_zero_mora_phrases() {
        // a zero-mora phrase after the first line stays in the first line
        let window = detect_window(0, &[5, 5, 12, 17, 24, 31]).unwrap();
        assert_eq!(window.ends, [2, 3, 4, 5, 6]);
        assert_eq!(window.phrase_counts(), [2, 1, 1, 1, 1]);
    }

    #[test]
    fn test_line_ranges_are_absolute() {
        let window = CandidateWindow {
            start: 3,
            ends: [1, 2, 3, 4, 5],
        };
        assert_eq!(window.line_range(0), 3..4);
        assert_eq!(window.line_range(4), 7..8);
        assert_eq!(window.span(), 3..8);
    }

    #[test]
    fn test_find_windows_every_start() {
        let phrases = phrases_with_morae(&[2, 3, 7, 5, 7, 2, 5]);
        let windows = find_windows(&phrases);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, 0);

        // a leading extra phrase moves the window but keeps it
        let phrases = phrases_with_morae(&[4, 5, 7, 5, 7, 7]);
        let windows = find_windows(&phrases);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, 1);
        assert_eq!(windows[0].span(), 1..6);
    }

    #[test]
    fn test_overlapping_windows_are_all_reported() {
        // zero-mora phrase at the front: starting at 0 or 1 both work
        let phrases = phrases_with_morae(&[0, 5, 7, 5, 7, 7]);
        let starts: Vec<usize> = find_windows(&phrases).iter().map(|w| w.start).collect();
        assert_eq!(starts, vec![0, 1]);
    }
}
