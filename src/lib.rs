//! Wordle Keys
//!
//! An interactive assistant for the daily five-letter puzzle. Key in the
//! colours each guess received; the assistant narrows the answer list and
//! suggests probe words that test the most common undecided letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_keys::core::GuessLine;
//! use wordle_keys::solver::Solver;
//! use wordle_keys::wordlists::loader::words_from_slice;
//!
//! let answers = words_from_slice(&["slain", "stain", "chain", "those"]);
//! let solver = Solver::new(&answers, &answers);
//!
//! let history = [GuessLine::from_pattern("stare", "--G--").unwrap()];
//! let analysis = solver.analyse(&history).unwrap();
//! assert_eq!(analysis.candidates.len(), 1);
//! ```

// Core domain types
pub mod core;

// Shared error types
pub mod errors;

// Key sources and key classification
pub mod input;

// Constraint engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive session
pub mod interactive;

// Logger setup
pub mod log;
