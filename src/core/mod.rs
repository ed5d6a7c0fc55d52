//! Core domain types for the assistant
//!
//! Words, per-letter feedback and guess lines. Nothing here touches the
//! terminal or the filesystem.

mod feedback;
mod word;

pub use feedback::{FeedbackSymbol, GuessLine, LetterOutcome, classify};
pub use word::{Word, WordError};

/// Number of letters in every puzzle word
pub const WORD_LEN: usize = 5;
