//! Constraint accumulation over the committed guess lines
//!
//! Two kinds of knowledge come out of the history:
//! - per position: either the letter is known (green), or a set of letters
//!   known to be elsewhere (yellow) is excluded from that position
//! - per letter: how many occurrences are confirmed, and whether a gray mark
//!   capped the count at exactly that many

use crate::core::{GuessLine, LetterOutcome, WORD_LEN};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// What is known about one position of the secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionConstraint {
    Fixed(u8),
    Excluding(BTreeSet<u8>),
}

impl Default for PositionConstraint {
    fn default() -> Self {
        Self::Excluding(BTreeSet::new())
    }
}

/// Occurrence bounds for one letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterBound {
    /// Occurrences confirmed by a single guess line
    pub min_count: usize,
    /// The secret holds no more than `min_count`
    pub is_exact: bool,
}

impl LetterBound {
    fn merge(&mut self, other: Self) {
        self.min_count = self.min_count.max(other.min_count);
        self.is_exact |= other.is_exact;
    }
}

/// Everything learned from the guess history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    positions: [PositionConstraint; WORD_LEN],
    bounds: BTreeMap<u8, LetterBound>,
}

impl Constraints {
    /// Recompute all constraints from scratch
    ///
    /// Deterministic: the same history always yields an equal value.
    ///
    /// # Examples
    /// ```
    /// use wordle_keys::core::GuessLine;
    /// use wordle_keys::solver::{Constraints, PositionConstraint};
    ///
    /// let history = [GuessLine::from_pattern("stare", "G-Y--").unwrap()];
    /// let constraints = Constraints::rebuild(&history);
    ///
    /// assert_eq!(constraints.positions()[0], PositionConstraint::Fixed(b's'));
    /// assert_eq!(constraints.bound(b'a').min_count, 1);
    /// assert!(constraints.bound(b't').is_exact);
    /// ```
    #[must_use]
    pub fn rebuild(history: &[GuessLine]) -> Self {
        let mut constraints = Self::default();

        for (column, position) in constraints.positions.iter_mut().enumerate() {
            *position = position_constraint(history, column);
        }

        for line in history {
            for (letter, bound) in line_bounds(line) {
                constraints.bounds.entry(letter).or_default().merge(bound);
            }
        }

        constraints
    }

    #[must_use]
    pub const fn positions(&self) -> &[PositionConstraint; WORD_LEN] {
        &self.positions
    }

    #[must_use]
    pub const fn bounds(&self) -> &BTreeMap<u8, LetterBound> {
        &self.bounds
    }

    /// Bound for `letter`; the default (no knowledge) if it was never guessed
    #[must_use]
    pub fn bound(&self, letter: u8) -> LetterBound {
        self.bounds.get(&letter).copied().unwrap_or_default()
    }

    /// Letters confirmed present somewhere (green or yellow in any line)
    #[must_use]
    pub fn confirmed_letters(&self) -> BTreeSet<u8> {
        self.bounds
            .iter()
            .filter(|(_, bound)| bound.min_count > 0)
            .map(|(&letter, _)| letter)
            .collect()
    }

    /// True when nothing is known yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
            && self
                .positions
                .iter()
                .all(|p| *p == PositionConstraint::default())
    }
}

/// First green in the column wins; otherwise collect the yellows
fn position_constraint(history: &[GuessLine], column: usize) -> PositionConstraint {
    let symbols = history.iter().map(|line| line.symbols()[column]);

    if let Some(green) = symbols
        .clone()
        .find(|s| s.outcome() == LetterOutcome::RightPlace)
    {
        return PositionConstraint::Fixed(green.letter());
    }

    PositionConstraint::Excluding(
        symbols
            .filter(|s| s.outcome() == LetterOutcome::WrongPlace)
            .map(|s| s.letter())
            .collect(),
    )
}

/// Letter bounds implied by a single line
fn line_bounds(line: &GuessLine) -> BTreeMap<u8, LetterBound> {
    let mut bounds: BTreeMap<u8, LetterBound> = BTreeMap::new();
    for symbol in line.symbols() {
        let bound = bounds.entry(symbol.letter()).or_default();
        if symbol.outcome().is_present() {
            bound.min_count += 1;
        } else {
            bound.is_exact = true;
        }
    }
    bounds
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in &self.positions {
            match position {
                PositionConstraint::Fixed(letter) => write!(f, "{}", *letter as char)?,
                PositionConstraint::Excluding(set) if set.is_empty() => f.write_str(".")?,
                PositionConstraint::Excluding(set) => {
                    let letters: String = set.iter().map(|&l| l as char).collect();
                    write!(f, "[^{letters}]")?;
                }
            }
        }
        for (&letter, bound) in &self.bounds {
            let op = if bound.is_exact { "=" } else { ">=" };
            write!(f, " {}{op}{}", letter as char, bound.min_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(word: &str, pattern: &str) -> GuessLine {
        GuessLine::from_pattern(word, pattern).unwrap()
    }

    #[test]
    fn empty_history_knows_nothing() {
        let constraints = Constraints::rebuild(&[]);
        assert!(constraints.is_empty());
        assert!(constraints.confirmed_letters().is_empty());
        assert_eq!(constraints.bound(b'a'), LetterBound::default());
    }

    #[test]
    fn green_fixes_position_and_drops_exclusions() {
        let history = [line("stare", "-Y---"), line("otter", "-G---")];
        let constraints = Constraints::rebuild(&history);
        assert_eq!(constraints.positions()[1], PositionConstraint::Fixed(b't'));
    }

    #[test]
    fn yellows_exclude_only_their_own_position() {
        let history = [line("stare", "Y-Y--"), line("abbey", "Y----")];
        let constraints = Constraints::rebuild(&history);

        assert_eq!(
            constraints.positions()[0],
            PositionConstraint::Excluding(BTreeSet::from([b'a', b's']))
        );
        assert_eq!(
            constraints.positions()[2],
            PositionConstraint::Excluding(BTreeSet::from([b'a']))
        );
        assert_eq!(constraints.positions()[1], PositionConstraint::default());
    }

    #[test]
    fn green_letter_never_in_its_exclusion_set() {
        let history = [line("stare", "Y----"), line("shale", "G----")];
        let constraints = Constraints::rebuild(&history);
        assert_eq!(constraints.positions()[0], PositionConstraint::Fixed(b's'));
    }

    #[test]
    fn counts_merge_by_maximum() {
        // One E confirmed in the first line, two in the second
        let history = [line("stare", "----Y"), line("geese", "-Y--G")];
        let constraints = Constraints::rebuild(&history);
        assert_eq!(
            constraints.bound(b'e'),
            LetterBound {
                min_count: 2,
                is_exact: true
            }
        );
    }

    #[test]
    fn absent_beside_confirmed_caps_count() {
        // Green E plus a gray E in the same line: exactly one E
        let history = [line("eerie", "G----")];
        let constraints = Constraints::rebuild(&history);
        assert_eq!(
            constraints.bound(b'e'),
            LetterBound {
                min_count: 1,
                is_exact: true
            }
        );
    }

    #[test]
    fn lone_absent_means_zero_occurrences() {
        let history = [line("stare", "-----")];
        let constraints = Constraints::rebuild(&history);
        for letter in b"stare" {
            assert_eq!(
                constraints.bound(*letter),
                LetterBound {
                    min_count: 0,
                    is_exact: true
                }
            );
        }
        assert!(constraints.confirmed_letters().is_empty());
    }

    #[test]
    fn exact_flag_sticks_across_lines() {
        let history = [line("eerie", "Y----"), line("ledge", "-G---")];
        let constraints = Constraints::rebuild(&history);
        let bound = constraints.bound(b'e');
        assert_eq!(bound.min_count, 1);
        assert!(bound.is_exact);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let history = [line("stare", "G-Y--"), line("slain", "GGG--")];
        let first = Constraints::rebuild(&history);
        let second = Constraints::rebuild(&history);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn confirmed_letters_from_greens_and_yellows() {
        let history = [line("stare", "G-Y--")];
        let constraints = Constraints::rebuild(&history);
        assert_eq!(constraints.confirmed_letters(), BTreeSet::from([b's', b'a']));
    }

    #[test]
    fn display_summarises_state() {
        let history = [line("stare", "G-Y--")];
        let constraints = Constraints::rebuild(&history);
        assert_eq!(
            constraints.to_string(),
            "s.[^a].. a>=1 e=0 r=0 s>=1 t=0"
        );
    }
}
