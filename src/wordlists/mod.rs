//! Word lists
//!
//! The answer vocabulary (possible secrets) and the allowed-guess vocabulary,
//! both sorted most frequent first.

pub mod loader;
pub mod used;

use crate::core::Word;
use crate::errors::LoadError;
use std::path::Path;

/// Default answer list, relative to the crate root
pub const ANSWER_WORDS_FILE: &str = "wordle-words/answer-words.manual.sorted.by.freq.txt";

/// Default allowed-guess list, relative to the crate root
pub const ALLOWED_GUESSES_FILE: &str = "wordle-words/allowed-guesses.wordle-code.sorted.by.freq.txt";

/// Default list of answers from past puzzles, relative to the crate root
pub const USED_ANSWERS_FILE: &str = "wordle-words/used-answers.txt";

/// Both vocabularies, loaded once and read-only afterwards
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub answers: Vec<Word>,
    pub allowed: Vec<Word>,
}

impl Vocabulary {
    /// Load both lists
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if either list cannot be read or is empty.
    pub fn load(answers: &Path, allowed: &Path) -> Result<Self, LoadError> {
        Ok(Self {
            answers: loader::load_from_file(answers)?,
            allowed: loader::load_from_file(allowed)?,
        })
    }

    /// Remove past answers listed in `used_path`, if it can be read
    #[must_use]
    pub fn without_used(self, used_path: &Path) -> Self {
        Self {
            answers: used::remove_used(self.answers, used_path),
            allowed: self.allowed,
        }
    }
}
