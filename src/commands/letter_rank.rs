//! Ranking words by the overall frequency of their letters
//!
//! Each word scores the sum, over its letters (repeats included), of how often
//! that letter occurs across the whole list.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Score and sort `words`, highest score first; ties keep list order
#[must_use]
pub fn rank_by_letter_frequency(words: &[Word]) -> Vec<(&Word, usize)> {
    let mut letter_counts: FxHashMap<u8, usize> = FxHashMap::default();
    for word in words {
        for &letter in word.chars() {
            *letter_counts.entry(letter).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(&Word, usize)> = words
        .iter()
        .map(|word| {
            let score = word
                .chars()
                .iter()
                .map(|l| letter_counts.get(l).copied().unwrap_or(0))
                .sum();
            (word, score)
        })
        .collect();

    // Stable sort keeps list order among equal scores
    scored.sort_by(|(_, a), (_, b)| b.cmp(a));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn scores_by_list_wide_letter_counts() {
        let words = words_from_slice(&["abcde", "aaaaa", "fghij"]);
        let ranked = rank_by_letter_frequency(&words);

        // a occurs 6 times: aaaaa = 30, abcde = 6 + 4, fghij = 5
        let summary: Vec<(&str, usize)> = ranked.iter().map(|(w, s)| (w.text(), *s)).collect();
        assert_eq!(summary, [("aaaaa", 30), ("abcde", 10), ("fghij", 5)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let words = words_from_slice(&["fghij", "klmno", "pqrst"]);
        let ranked = rank_by_letter_frequency(&words);
        let texts: Vec<&str> = ranked.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(texts, ["fghij", "klmno", "pqrst"]);
    }
}
