//! Candidate filtering with compiled patterns
//!
//! The constraints become two regular expressions:
//! - a positional pattern, e.g. `^s[^t][a-z][^ae]e$`
//! - a count pattern made of one lookahead per bounded letter, e.g.
//!   `^(?=(?:[^a]*a){1})(?=[^e]*(?:e[^e]*){2}$)(?=[^t]*$)`
//!
//! A word is a candidate when it matches both.

use super::constraints::{Constraints, PositionConstraint};
use crate::core::Word;
use crate::errors::FilterError;
use fancy_regex::Regex;
use std::fmt::Write;

/// Compiled form of a `Constraints` value
#[derive(Debug)]
pub struct CandidateFilter {
    positional: Regex,
    counts: Regex,
}

impl CandidateFilter {
    /// Compile the constraints into matchable patterns
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Pattern` if a pattern fails to compile.
    pub fn compile(constraints: &Constraints) -> Result<Self, FilterError> {
        Ok(Self {
            positional: Regex::new(&positional_pattern(constraints))?,
            counts: Regex::new(&count_pattern(constraints))?,
        })
    }

    #[must_use]
    pub fn positional_pattern(&self) -> &str {
        self.positional.as_str()
    }

    #[must_use]
    pub fn count_pattern(&self) -> &str {
        self.counts.as_str()
    }

    /// Check a single word against both patterns
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Pattern` if the regex engine gives up on the input.
    pub fn matches(&self, word: &Word) -> Result<bool, FilterError> {
        Ok(self.positional.is_match(word.text())? && self.counts.is_match(word.text())?)
    }

    /// Keep the words consistent with every constraint, preserving order
    ///
    /// An empty result is a valid outcome.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Pattern` if matching fails.
    ///
    /// # Examples
    /// ```
    /// use wordle_keys::core::GuessLine;
    /// use wordle_keys::solver::{CandidateFilter, Constraints};
    /// use wordle_keys::wordlists::loader::words_from_slice;
    ///
    /// let vocabulary = words_from_slice(&["shale", "stain", "slain", "salon", "spoil"]);
    /// let history = [GuessLine::from_pattern("stare", "G-Y--").unwrap()];
    /// let filter = CandidateFilter::compile(&Constraints::rebuild(&history)).unwrap();
    ///
    /// let candidates = filter.filter(&vocabulary).unwrap();
    /// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    /// assert_eq!(texts, ["salon"]);
    /// ```
    pub fn filter<'a>(&self, vocabulary: &'a [Word]) -> Result<Vec<&'a Word>, FilterError> {
        let mut candidates = Vec::new();
        for word in vocabulary {
            if self.matches(word)? {
                candidates.push(word);
            }
        }
        Ok(candidates)
    }
}

fn positional_pattern(constraints: &Constraints) -> String {
    let mut pattern = String::from("^");
    for position in constraints.positions() {
        match position {
            PositionConstraint::Fixed(letter) => pattern.push(*letter as char),
            PositionConstraint::Excluding(set) if set.is_empty() => pattern.push_str("[a-z]"),
            PositionConstraint::Excluding(set) => {
                pattern.push_str("[^");
                pattern.extend(set.iter().map(|&l| l as char));
                pattern.push(']');
            }
        }
    }
    pattern.push('$');
    pattern
}

fn count_pattern(constraints: &Constraints) -> String {
    let mut pattern = String::from("^");
    for (&letter, bound) in constraints.bounds() {
        let l = letter as char;
        let n = bound.min_count;
        // Writing to a String cannot fail
        let _ = match (bound.is_exact, n) {
            (true, 0) => write!(pattern, "(?=[^{l}]*$)"),
            (true, _) => write!(pattern, "(?=[^{l}]*(?:{l}[^{l}]*){{{n}}}$)"),
            (false, 0) => Ok(()),
            (false, _) => write!(pattern, "(?=(?:[^{l}]*{l}){{{n}}})"),
        };
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessLine;
    use crate::wordlists::loader::words_from_slice;

    const VOCAB: &[&str] = &[
        "slain", "stain", "shale", "eerie", "geese", "those", "speed", "abide", "union", "cloud",
    ];

    fn compile(lines: &[(&str, &str)]) -> CandidateFilter {
        let history: Vec<GuessLine> = lines
            .iter()
            .map(|(w, p)| GuessLine::from_pattern(w, p).unwrap())
            .collect();
        CandidateFilter::compile(&Constraints::rebuild(&history)).unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let vocabulary = words_from_slice(VOCAB);
        let filter = compile(&[]);
        assert_eq!(filter.positional_pattern(), "^[a-z][a-z][a-z][a-z][a-z]$");
        assert_eq!(filter.count_pattern(), "^");

        let candidates = filter.filter(&vocabulary).unwrap();
        assert_eq!(texts(&candidates), VOCAB);
    }

    #[test]
    fn all_gray_excludes_every_guessed_letter() {
        let vocabulary = words_from_slice(VOCAB);
        let filter = compile(&[("stare", "-----")]);
        let candidates = filter.filter(&vocabulary).unwrap();

        assert_eq!(texts(&candidates), ["union", "cloud"]);
        for word in &candidates {
            assert!(!b"stare".iter().any(|&l| word.has_letter(l)));
        }
    }

    #[test]
    fn compiled_patterns_reflect_constraints() {
        let filter = compile(&[("stare", "G-Y--")]);
        assert_eq!(filter.positional_pattern(), "^s[a-z][^a][a-z][a-z]$");
        assert_eq!(
            filter.count_pattern(),
            "^(?=(?:[^a]*a){1})(?=[^e]*$)(?=[^r]*$)(?=(?:[^s]*s){1})(?=[^t]*$)"
        );
    }

    #[test]
    fn exact_count_rejects_extra_occurrences() {
        let vocabulary = words_from_slice(&["geese", "those", "speed", "eerie"]);
        // One E confirmed and capped: exactly one E
        let filter = compile(&[("eerie", "-----"), ("those", "----G")]);
        let candidates = filter.filter(&vocabulary).unwrap();
        assert!(candidates.is_empty());

        let filter = compile(&[("those", "---GG")]);
        let candidates = filter.filter(&vocabulary).unwrap();
        assert_eq!(texts(&candidates), ["geese"]);
    }

    #[test]
    fn exact_repeat_count() {
        let vocabulary = words_from_slice(&["geese", "those", "speed", "eerie"]);
        // Two yellow E's and three gray ones: exactly two, not in positions 0 and 1
        let filter = compile(&[("eeeee", "YY---")]);
        assert_eq!(filter.count_pattern(), "^(?=[^e]*(?:e[^e]*){2}$)");
        let candidates = filter.filter(&vocabulary).unwrap();
        assert_eq!(texts(&candidates), ["speed"]);
    }

    #[test]
    fn preserves_vocabulary_order() {
        let vocabulary = words_from_slice(&["union", "speed", "cloud", "slain"]);
        let filter = compile(&[("pygmy", "-----")]);
        let candidates = filter.filter(&vocabulary).unwrap();
        assert_eq!(texts(&candidates), ["union", "cloud", "slain"]);
    }

    #[test]
    fn narrowing_never_grows_candidates() {
        let vocabulary = words_from_slice(VOCAB);
        let one = compile(&[("stare", "--Y--")]).filter(&vocabulary).unwrap();
        let two = compile(&[("stare", "--Y--"), ("plain", "--GYG")])
            .filter(&vocabulary)
            .unwrap();
        assert!(two.len() <= one.len());
        assert!(two.iter().all(|w| one.contains(w)));
    }

    #[test]
    fn nothing_matches_is_not_an_error() {
        let vocabulary = words_from_slice(VOCAB);
        let filter = compile(&[("zzzzz", "GGGG-")]);
        assert!(filter.filter(&vocabulary).unwrap().is_empty());
    }
}
