//! Main solver interface

use super::constraints::Constraints;
use super::filter::CandidateFilter;
use super::probe::select_probes;
use crate::core::{GuessLine, Word};
use crate::errors::FilterError;

/// Result of running the whole pipeline over a guess history
#[derive(Debug)]
pub struct Analysis<'a> {
    pub constraints: Constraints,
    pub filter: CandidateFilter,
    /// Answer words consistent with the history, in vocabulary order
    pub candidates: Vec<&'a Word>,
    /// Suggested probe words, answer vocabulary hits first
    pub probes: Vec<&'a Word>,
}

/// Coordinates constraint building, filtering and probe selection
pub struct Solver<'a> {
    answer_words: &'a [Word],
    allowed_words: &'a [Word],
}

impl<'a> Solver<'a> {
    /// Create a new solver over the two vocabularies
    ///
    /// # Parameters
    /// - `answer_words`: Words that can be the secret, most frequent first
    /// - `allowed_words`: All words accepted as guesses, most frequent first
    pub const fn new(answer_words: &'a [Word], allowed_words: &'a [Word]) -> Self {
        Self {
            answer_words,
            allowed_words,
        }
    }

    #[must_use]
    pub const fn answer_words(&self) -> &'a [Word] {
        self.answer_words
    }

    #[must_use]
    pub const fn allowed_words(&self) -> &'a [Word] {
        self.allowed_words
    }

    /// Rebuild constraints from `history`, filter the answers and pick probes
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the compiled patterns cannot be built or run.
    pub fn analyse(&self, history: &[GuessLine]) -> Result<Analysis<'a>, FilterError> {
        let constraints = Constraints::rebuild(history);
        let filter = CandidateFilter::compile(&constraints)?;
        log::debug!("constraints: {constraints}");
        log::debug!("positional pattern: {}", filter.positional_pattern());
        log::debug!("count pattern: {}", filter.count_pattern());

        let candidates = filter.filter(self.answer_words)?;
        let probes = select_probes(
            &candidates,
            &constraints.confirmed_letters(),
            self.answer_words,
            self.allowed_words,
        );
        log::debug!(
            "{} of {} answers remain, {} probes from {} allowed guesses",
            candidates.len(),
            self.answer_words.len(),
            probes.len(),
            self.allowed_words.len()
        );

        Ok(Analysis {
            constraints,
            filter,
            candidates,
            probes,
        })
    }
}
