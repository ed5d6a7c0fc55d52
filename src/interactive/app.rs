//! Session state and the key loop

use super::rendering::{Presenter, Progress};
use crate::core::{FeedbackSymbol, GuessLine, Word};
use crate::errors::InputError;
use crate::input::{ControlAction, KeySource, Keystroke, classify_key};
use crate::solver::{LineBuffer, Solver};
use anyhow::Result;
use crossterm::event::KeyEvent;

/// Settings for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Show the compiled patterns with each report
    pub debug: bool,
    /// Maximum number of candidate and probe words shown per report
    pub show_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debug: false,
            show_limit: 20,
        }
    }
}

/// What the session wants after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// All five letters green, after this many lines
    Won(usize),
    /// No answer word is consistent with the history
    Lost,
    Aborted,
}

/// One puzzle being solved
///
/// Owns the guess history and the line being typed; the vocabularies are
/// borrowed for the whole session.
pub struct Session<'a, P: Presenter> {
    config: SessionConfig,
    solver: Solver<'a>,
    history: Vec<GuessLine>,
    buffer: LineBuffer,
    presenter: P,
}

impl<'a, P: Presenter> Session<'a, P> {
    #[must_use]
    pub fn new(
        config: SessionConfig,
        answer_words: &'a [Word],
        allowed_words: &'a [Word],
        presenter: P,
    ) -> Self {
        log::debug!(
            "session over {} answer words and {} allowed guesses",
            answer_words.len(),
            allowed_words.len()
        );
        Self {
            config,
            solver: Solver::new(answer_words, allowed_words),
            history: Vec::new(),
            buffer: LineBuffer::new(),
            presenter,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[GuessLine] {
        &self.history
    }

    #[must_use]
    pub const fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Classify a raw key event and apply it
    ///
    /// # Errors
    ///
    /// Returns an error only for presentation or filtering failures; keys that
    /// are not understood are reported to the presenter and dropped.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Result<Flow> {
        match classify_key(key) {
            Some(keystroke) => self.handle(keystroke),
            None => self.reject(&InputError::UnrecognizedKey),
        }
    }

    /// Apply a classified keystroke
    ///
    /// # Errors
    ///
    /// See [`Session::handle_key`].
    pub fn handle(&mut self, keystroke: Keystroke) -> Result<Flow> {
        match keystroke {
            Keystroke::Letter(symbol) => self.append(symbol),
            Keystroke::Control(ControlAction::DeleteLast) => self.delete_last(),
            Keystroke::Control(ControlAction::Submit) => self.submit(),
            Keystroke::Control(ControlAction::Abort) => {
                log::debug!("aborted after {} lines", self.history.len());
                Ok(Flow::Aborted)
            }
        }
    }

    fn append(&mut self, symbol: FeedbackSymbol) -> Result<Flow> {
        if let Err(err) = self.buffer.append(symbol, &self.history) {
            return self.reject(&err);
        }
        self.presenter.emit(symbol)?;
        Ok(Flow::Continue)
    }

    fn delete_last(&mut self) -> Result<Flow> {
        if let Err(err) = self.buffer.delete_last() {
            return self.reject(&err);
        }
        self.presenter.erase_last()?;
        Ok(Flow::Continue)
    }

    fn submit(&mut self) -> Result<Flow> {
        let line = match self.buffer.commit() {
            Ok(line) => line,
            Err(err) => return self.reject(&err),
        };
        self.presenter.end_line()?;

        if line.is_solved() {
            let guesses = self.history.len() + 1;
            self.presenter.notify_win(guesses)?;
            return Ok(Flow::Won(guesses));
        }

        self.history.push(line);
        let analysis = self.solver.analyse(&self.history)?;

        let limit = self.config.show_limit;
        let patterns = self.config.debug.then(|| {
            (
                analysis.filter.positional_pattern(),
                analysis.filter.count_pattern(),
            )
        });
        self.presenter.notify_progress(&Progress {
            candidates: &analysis.candidates[..analysis.candidates.len().min(limit)],
            total_candidates: analysis.candidates.len(),
            probes: &analysis.probes[..analysis.probes.len().min(limit)],
            patterns,
        })?;

        if analysis.candidates.is_empty() {
            self.presenter.notify_loss()?;
            return Ok(Flow::Lost);
        }
        Ok(Flow::Continue)
    }

    fn reject(&mut self, err: &InputError) -> Result<Flow> {
        self.presenter.notify_error(err)?;
        Ok(Flow::Continue)
    }
}

/// Feed keys to the session until it wins, loses or is aborted
///
/// # Errors
///
/// Returns an error if the key source or the presenter fails.
pub fn run_session<P: Presenter, K: KeySource>(
    session: &mut Session<'_, P>,
    keys: &mut K,
) -> Result<Flow> {
    loop {
        let key = keys.next_event()?;
        match session.handle_key(&key)? {
            Flow::Continue => {}
            done => return Ok(done),
        }
    }
}
