//! Word list loading utilities
//!
//! Lists are plain text, one word per line, already sorted by usage frequency.

use crate::core::Word;
use crate::errors::LoadError;
use std::fs;
use std::path::Path;

/// Load words from a file, keeping file order
///
/// Blank lines and entries that are not 5-letter words are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and `LoadError::Empty`
/// if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_keys::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle-words/answer-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated text into words, skipping invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_keys::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["stare", "toolong", "slain"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
