//! Command implementations

pub mod classify;
pub mod letter_rank;
pub mod sort_freq;

pub use classify::{ClassifyResult, classify_words};
pub use letter_rank::rank_by_letter_frequency;
pub use sort_freq::{FrequencySort, parse_frequencies, sort_by_frequency};
