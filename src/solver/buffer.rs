//! The guess line currently being keyed in

use crate::core::{FeedbackSymbol, GuessLine, LetterOutcome, WORD_LEN};
use crate::errors::InputError;

/// Holds up to five symbols until the line is submitted
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    symbols: Vec<FeedbackSymbol>,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: Vec::with_capacity(WORD_LEN),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[FeedbackSymbol] {
        &self.symbols
    }

    /// Add a symbol to the end of the line
    ///
    /// # Errors
    ///
    /// - `LineFull` when five symbols are already held
    /// - `Conflict` when the symbol contradicts a green mark of a committed
    ///   line in the same column
    pub fn append(
        &mut self,
        symbol: FeedbackSymbol,
        history: &[GuessLine],
    ) -> Result<(), InputError> {
        if self.symbols.len() == WORD_LEN {
            return Err(InputError::LineFull);
        }

        let column = self.symbols.len();
        let clash = history
            .iter()
            .map(|line| line.symbols()[column])
            .any(|earlier| contradicts(earlier, symbol));
        if clash {
            return Err(InputError::Conflict {
                letter: symbol.letter() as char,
                column,
            });
        }

        self.symbols.push(symbol);
        Ok(())
    }

    /// Remove the most recently appended symbol
    ///
    /// # Errors
    ///
    /// Returns `NothingToDelete` if the line is empty.
    pub fn delete_last(&mut self) -> Result<FeedbackSymbol, InputError> {
        self.symbols.pop().ok_or(InputError::NothingToDelete)
    }

    /// Hand over a complete line, leaving the buffer empty
    ///
    /// # Errors
    ///
    /// Returns `LineIncomplete` (and keeps the symbols) unless exactly five are held.
    pub fn commit(&mut self) -> Result<GuessLine, InputError> {
        let symbols: [FeedbackSymbol; WORD_LEN] = self
            .symbols
            .as_slice()
            .try_into()
            .map_err(|_| InputError::LineIncomplete(self.symbols.len()))?;
        self.symbols.clear();
        Ok(GuessLine::new(symbols))
    }
}

/// Two marks in the same column that cannot both be true
fn contradicts(earlier: FeedbackSymbol, new: FeedbackSymbol) -> bool {
    let earlier_green = earlier.outcome() == LetterOutcome::RightPlace;
    let new_green = new.outcome() == LetterOutcome::RightPlace;

    if earlier.letter() == new.letter() {
        earlier_green != new_green
    } else {
        earlier_green && new_green
    }
}
