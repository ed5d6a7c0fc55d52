//! Presentation of the session
//!
//! The session talks to a `Presenter`; `TerminalPresenter` is the coloured,
//! line-oriented implementation used by the binary.

use crate::core::{FeedbackSymbol, Word};
use crate::errors::InputError;
use crate::output::formatters::{tile, word_rows};
use colored::Colorize;
use std::io::{self, Write};

const WORDS_PER_ROW: usize = 10;

/// Results shown after each committed line
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Candidates to show, most frequent first (possibly truncated)
    pub candidates: &'a [&'a Word],
    /// Total number of consistent answer words
    pub total_candidates: usize,
    /// Probe words to show (possibly truncated)
    pub probes: &'a [&'a Word],
    /// Compiled positional and count patterns, when debugging
    pub patterns: Option<(&'a str, &'a str)>,
}

/// Receives everything the session wants the user to see
pub trait Presenter {
    /// Echo an accepted symbol
    fn emit(&mut self, symbol: FeedbackSymbol) -> io::Result<()>;

    /// Remove the last echoed symbol
    fn erase_last(&mut self) -> io::Result<()>;

    /// Finish the row of a submitted line
    fn end_line(&mut self) -> io::Result<()>;

    /// Non-fatal cue for a rejected key
    fn notify_error(&mut self, error: &InputError) -> io::Result<()>;

    fn notify_progress(&mut self, progress: &Progress<'_>) -> io::Result<()>;

    /// The puzzle is solved in `guesses` lines
    fn notify_win(&mut self, guesses: usize) -> io::Result<()>;

    /// No answer word fits the feedback
    fn notify_loss(&mut self) -> io::Result<()>;
}

/// Writes coloured tiles and reports to any writer (normally stdout)
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl TerminalPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Print usage instructions before the first line
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn print_banner(&mut self, answers: usize, allowed: usize) -> io::Result<()> {
        writeln!(self.out, "{}", "═".repeat(60).cyan())?;
        writeln!(
            self.out,
            "{}",
            "  Wordle keys: type each guess as the puzzle coloured it"
                .bright_cyan()
                .bold()
        )?;
        writeln!(self.out, "{}", "═".repeat(60).cyan())?;
        writeln!(
            self.out,
            "  {} right place   {} wrong place   {} absent",
            "Shift+letter".green().bold(),
            "letter".yellow().bold(),
            "Alt+letter".bright_black().bold()
        )?;
        writeln!(self.out, "  Enter submits, Backspace deletes, Esc quits")?;
        writeln!(
            self.out,
            "  {answers} answer words, {allowed} allowed guesses\n"
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn emit(&mut self, symbol: FeedbackSymbol) -> io::Result<()> {
        write!(self.out, "{}", tile(symbol))?;
        self.out.flush()
    }

    fn erase_last(&mut self) -> io::Result<()> {
        write!(self.out, "\x08 \x08")?;
        self.out.flush()
    }

    fn end_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn notify_error(&mut self, error: &InputError) -> io::Result<()> {
        // Terminal bell
        write!(self.out, "\x07")?;
        self.out.flush()?;
        log::debug!("rejected key: {error}");
        Ok(())
    }

    fn notify_progress(&mut self, progress: &Progress<'_>) -> io::Result<()> {
        if let Some((positional, counts)) = progress.patterns {
            writeln!(self.out, "{} {positional}", "positions:".bright_black())?;
            writeln!(self.out, "{} {counts}", "counts:   ".bright_black())?;
        }

        writeln!(
            self.out,
            "\n{} {}",
            "Candidates:".bright_cyan().bold(),
            progress.total_candidates.to_string().bright_yellow().bold()
        )?;
        for row in word_rows(progress.candidates, WORDS_PER_ROW) {
            writeln!(self.out, "  {row}")?;
        }
        if progress.candidates.len() < progress.total_candidates {
            writeln!(
                self.out,
                "  {}",
                format!(
                    "... and {} more",
                    progress.total_candidates - progress.candidates.len()
                )
                .bright_black()
            )?;
        }

        if progress.probes.is_empty() {
            writeln!(self.out, "{}", "No probe words found".bright_black())?;
        } else {
            writeln!(self.out, "{}", "Probe words:".bright_cyan().bold())?;
            for row in word_rows(progress.probes, WORDS_PER_ROW) {
                writeln!(self.out, "  {row}")?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn notify_win(&mut self, guesses: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{}",
            format!(
                "Solved in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        )?;
        self.out.flush()
    }

    fn notify_loss(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            "No consistent word found - check the colours you entered."
                .red()
                .bold()
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;
    use crate::wordlists::loader::words_from_slice;

    fn rendered(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn echo_and_erase() {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .emit(FeedbackSymbol::new(b's', LetterOutcome::RightPlace).unwrap())
            .unwrap();
        presenter.erase_last().unwrap();
        assert_eq!(rendered(presenter), "S\x08 \x08");
    }

    #[test]
    fn error_rings_bell() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.notify_error(&InputError::LineFull).unwrap();
        assert_eq!(rendered(presenter), "\x07");
    }

    #[test]
    fn progress_lists_words_and_remainder() {
        colored::control::set_override(false);
        let words = words_from_slice(&["slain", "stain", "chefs"]);
        let candidates: Vec<&Word> = words.iter().take(2).collect();
        let probes: Vec<&Word> = words.iter().skip(2).collect();

        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .notify_progress(&Progress {
                candidates: &candidates,
                total_candidates: 5,
                probes: &probes,
                patterns: Some(("^s....$", "^")),
            })
            .unwrap();

        let text = rendered(presenter);
        assert!(text.contains("Candidates: 5"));
        assert!(text.contains("slain stain"));
        assert!(text.contains("... and 3 more"));
        assert!(text.contains("Probe words:"));
        assert!(text.contains("chefs"));
        assert!(text.contains("^s....$"));
    }

    #[test]
    fn progress_without_probes() {
        colored::control::set_override(false);
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter
            .notify_progress(&Progress {
                candidates: &[],
                total_candidates: 0,
                probes: &[],
                patterns: None,
            })
            .unwrap();
        assert!(rendered(presenter).contains("No probe words found"));
    }
}
