//! Error types shared across the crate
//!
//! `InputError` covers everything a user can get wrong at the keyboard. Those
//! are recovered locally by the session and never abort the program.
//! `FilterError` and `LoadError` are real failures and propagate with `?`.

use std::io;
use std::path::PathBuf;

/// A keystroke that could not be applied to the current guess line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("the guess line already holds five letters")]
    LineFull,

    #[error("the guess line needs five letters before it can be submitted (has {0})")]
    LineIncomplete(usize),

    #[error("nothing to delete")]
    NothingToDelete,

    #[error("'{letter}' at column {} contradicts an earlier mark in that column", .column + 1)]
    Conflict { letter: char, column: usize },

    #[error("key not understood")]
    UnrecognizedKey,
}

/// Failure to build or evaluate a compiled constraint pattern
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid constraint pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),
}

/// Failure to read a word list
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {0} contains no valid words")]
    Empty(PathBuf),
}
