//! Terminal output formatting
//!
//! Coloured tiles shared by the session and the commands, and printers for
//! command results.

pub mod display;
pub mod formatters;

pub use display::{print_classify_result, print_missing_words, write_words};
