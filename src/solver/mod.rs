//! Constraint solving
//!
//! Guess line buffering, constraint accumulation, candidate filtering and
//! probe selection.

mod buffer;
mod constraints;
mod engine;
mod filter;
pub mod probe;

pub use buffer::LineBuffer;
pub use constraints::{Constraints, LetterBound, PositionConstraint};
pub use engine::{Analysis, Solver};
pub use filter::CandidateFilter;
pub use probe::{rank_letters, select_probes};
