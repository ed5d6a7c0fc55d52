//! Probe ("anti-word") selection
//!
//! A probe is a guess picked to test the most frequent letters that are still
//! undecided among the candidates, whether or not it could be the answer.
//!
//! # Algorithm
//! 1. Score each letter by its occurrences across all candidates, skipping
//!    letters already confirmed present
//! 2. Rank letters by descending score (ties alphabetical) and keep the top
//!    `PROBE_LETTER_POOL`
//! 3. For sizes 5, 4, 3, 2: for every combination of that many ranked letters,
//!    collect answer words containing all of them, falling back to the
//!    allowed guesses when the answers give at most one hit
//! 4. Stop as soon as more than one probe is found

use crate::core::Word;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Number of top-ranked letters taking part in the combination search
pub const PROBE_LETTER_POOL: usize = 10;

/// Probe sizes tried, largest first
pub const PROBE_SIZES: [usize; 4] = [5, 4, 3, 2];

/// Rank undecided letters by how often they occur across `candidates`
///
/// Letters in `confirmed` and letters absent from every candidate are left out.
#[must_use]
pub fn rank_letters(candidates: &[&Word], confirmed: &BTreeSet<u8>) -> Vec<(u8, usize)> {
    let mut scores: FxHashMap<u8, usize> = FxHashMap::default();
    for word in candidates {
        for &letter in word.chars() {
            if !confirmed.contains(&letter) {
                *scores.entry(letter).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(u8, usize)> = scores.into_iter().collect();
    ranked.sort_unstable_by(|(l1, s1), (l2, s2)| s2.cmp(s1).then(l1.cmp(l2)));
    ranked
}

/// Suggest probe words for the current candidates
///
/// Returns an empty list when no combination of at least two ranked letters
/// is found in either vocabulary.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use wordle_keys::solver::select_probes;
/// use wordle_keys::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["cling", "fling", "sling"]);
/// let candidate_refs: Vec<_> = candidates.iter().collect();
/// let confirmed = BTreeSet::from([b'l', b'i', b'n', b'g']);
/// let answers = words_from_slice(&["scarf", "chefs", "pouch"]);
///
/// let probes = select_probes(&candidate_refs, &confirmed, &answers, &[]);
/// let texts: Vec<&str> = probes.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["scarf", "chefs"]);
/// ```
#[must_use]
pub fn select_probes<'a>(
    candidates: &[&Word],
    confirmed: &BTreeSet<u8>,
    answers: &'a [Word],
    allowed: &'a [Word],
) -> Vec<&'a Word> {
    let pool: Vec<u8> = rank_letters(candidates, confirmed)
        .into_iter()
        .take(PROBE_LETTER_POOL)
        .map(|(letter, _)| letter)
        .collect();

    let mut probes: Vec<&'a Word> = Vec::new();

    for size in PROBE_SIZES {
        for letters in pool.iter().copied().combinations(size) {
            let mut hits: Vec<&'a Word> = containing_all(answers, &letters).collect();
            if hits.len() <= 1 {
                let extra: Vec<&'a Word> = containing_all(allowed, &letters)
                    .filter(|w| !hits.iter().any(|h| h.text() == w.text()))
                    .collect();
                hits.extend(extra);
            }

            for hit in hits {
                if !probes.iter().any(|p| p.text() == hit.text()) {
                    probes.push(hit);
                }
            }

            if probes.len() > 1 {
                return probes;
            }
        }
    }

    probes
}

fn containing_all<'a>(words: &'a [Word], letters: &[u8]) -> impl Iterator<Item = &'a Word> {
    words.iter().filter(move |w| w.has_all(letters))
}
