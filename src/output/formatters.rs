//! Formatting utilities for terminal output

use crate::core::{FeedbackSymbol, GuessLine, LetterOutcome, Word};
use colored::{ColoredString, Colorize};

/// A single coloured letter tile: green, yellow or black background
#[must_use]
pub fn tile(symbol: FeedbackSymbol) -> ColoredString {
    let letter = (symbol.letter() as char).to_ascii_uppercase().to_string();
    let styled = letter.bold().white();
    match symbol.outcome() {
        LetterOutcome::RightPlace => styled.on_green(),
        LetterOutcome::WrongPlace => styled.on_yellow(),
        LetterOutcome::Absent => styled.on_black(),
    }
}

/// A whole guess line as adjacent tiles
#[must_use]
pub fn line_tiles(line: &GuessLine) -> String {
    line.symbols().iter().map(|&s| tile(s).to_string()).collect()
}

/// Lay words out in rows of `per_row`, space separated
#[must_use]
pub fn word_rows(words: &[&Word], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|w| w.text())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn tile_shows_uppercase_letter() {
        colored::control::set_override(false);
        let symbol = FeedbackSymbol::new(b'q', LetterOutcome::Absent).unwrap();
        assert_eq!(tile(symbol).to_string(), "Q");
    }

    #[test]
    fn line_tiles_keep_letter_order() {
        colored::control::set_override(false);
        let line = GuessLine::from_pattern("stare", "GY-GY").unwrap();
        assert_eq!(line_tiles(&line), "STARE");
    }

    #[test]
    fn word_rows_wrap() {
        let words = words_from_slice(&["slain", "stain", "shale", "plain", "chain"]);
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(
            word_rows(&refs, 2),
            ["slain stain", "shale plain", "chain"]
        );
        assert!(word_rows(&[], 4).is_empty());
    }
}
