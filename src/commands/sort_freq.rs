//! Reordering a word list by corpus usage frequency
//!
//! The frequency table is a `word,count` CSV (e.g. a unigram count export).
//! Words missing from it count as zero.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Result of sorting a list by frequency
pub struct FrequencySort<'a> {
    /// Words with their counts, most frequent first; ties keep list order
    pub sorted: Vec<(&'a Word, u64)>,
    /// Words not found in the frequency table
    pub missing: Vec<&'a Word>,
}

/// Parse `word,count` lines; lines without a numeric count (headers) are skipped
#[must_use]
pub fn parse_frequencies(csv: &str) -> FxHashMap<String, u64> {
    csv.lines()
        .filter_map(|line| {
            let (word, count) = line.split_once(',')?;
            let count = count.trim().parse().ok()?;
            Some((word.trim().to_lowercase(), count))
        })
        .collect()
}

/// Sort `words` by descending frequency
#[must_use]
pub fn sort_by_frequency<'a>(words: &'a [Word], frequencies: &FxHashMap<String, u64>) -> FrequencySort<'a> {
    let mut missing = Vec::new();
    let mut sorted: Vec<(&Word, u64)> = words
        .iter()
        .map(|word| {
            let count = frequencies.get(word.text()).copied().unwrap_or_else(|| {
                missing.push(word);
                0
            });
            (word, count)
        })
        .collect();

    sorted.sort_by(|(_, a), (_, b)| b.cmp(a));
    FrequencySort { sorted, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const CSV: &str = "word,count\nthe,23135851162\nthose,1000\nslain,50\nstare,1000\n";

    #[test]
    fn parse_skips_header() {
        let freqs = parse_frequencies(CSV);
        assert_eq!(freqs.len(), 4);
        assert_eq!(freqs.get("slain"), Some(&50));
        assert!(!freqs.contains_key("word"));
    }

    #[test]
    fn sorts_descending_and_reports_missing() {
        let words = words_from_slice(&["slain", "stare", "zebra", "those"]);
        let result = sort_by_frequency(&words, &parse_frequencies(CSV));

        let order: Vec<&str> = result.sorted.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, ["stare", "those", "slain", "zebra"]);
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].text(), "zebra");
    }
}
