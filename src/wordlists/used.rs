//! Removal of answers already used in past puzzles
//!
//! Best effort: any problem reading the list leaves the answers unchanged.

use super::loader::load_from_file;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Drop every word listed in `used_path` from `answers`, keeping order
#[must_use]
pub fn remove_used(answers: Vec<Word>, used_path: &Path) -> Vec<Word> {
    let used = match load_from_file(used_path) {
        Ok(words) => words,
        Err(err) => {
            log::warn!("used answers not removed: {err}");
            return answers;
        }
    };
    remove_words(answers, &used)
}

/// Drop every word of `used` from `answers`, keeping order
#[must_use]
pub fn remove_words(answers: Vec<Word>, used: &[Word]) -> Vec<Word> {
    let used: FxHashSet<&str> = used.iter().map(Word::text).collect();
    let before = answers.len();
    let remaining: Vec<Word> = answers
        .into_iter()
        .filter(|w| !used.contains(w.text()))
        .collect();
    log::debug!("removed {} used answers", before - remaining.len());
    remaining
}
