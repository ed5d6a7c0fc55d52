//! Per-letter feedback and complete guess lines
//!
//! A guess line is five `FeedbackSymbol`s, each pairing a letter with the
//! colour the puzzle gave it:
//! - `RightPlace` = Green (letter at this exact position)
//! - `WrongPlace` = Yellow (letter in the word, not here)
//! - `Absent` = Gray (no occurrences beyond those already confirmed)

use super::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Outcome the puzzle reported for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterOutcome {
    RightPlace,
    WrongPlace,
    Absent,
}

impl LetterOutcome {
    /// True for `RightPlace` and `WrongPlace`
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::RightPlace | Self::WrongPlace)
    }

    /// Emoji square used in summaries
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::RightPlace => '🟩',
            Self::WrongPlace => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RightPlace => "RIGHT_PLACE",
            Self::WrongPlace => "WRONG_PLACE",
            Self::Absent => "ABSENT",
        })
    }
}

/// A letter paired with its outcome
///
/// The letter is always stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackSymbol {
    letter: u8,
    outcome: LetterOutcome,
}

impl FeedbackSymbol {
    /// Create a symbol, normalising the letter to lowercase
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn new(letter: u8, outcome: LetterOutcome) -> Option<Self> {
        letter.is_ascii_alphabetic().then(|| Self {
            letter: letter.to_ascii_lowercase(),
            outcome,
        })
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn outcome(self) -> LetterOutcome {
        self.outcome
    }
}

impl fmt::Display for FeedbackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.letter as char, self.outcome)
    }
}

/// A committed row of exactly five symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessLine([FeedbackSymbol; WORD_LEN]);

impl GuessLine {
    #[must_use]
    pub const fn new(symbols: [FeedbackSymbol; WORD_LEN]) -> Self {
        Self(symbols)
    }

    /// Build a line from a word and a pattern string like "GY-GY"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for `RightPlace`
    /// - 'Y'/'y'/🟨 for `WrongPlace`
    /// - '-'/'_'/⬜ for `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_keys::core::{GuessLine, LetterOutcome};
    ///
    /// let line = GuessLine::from_pattern("stare", "G-Y--").unwrap();
    /// assert_eq!(line.symbols()[0].outcome(), LetterOutcome::RightPlace);
    /// assert_eq!(line.symbols()[2].outcome(), LetterOutcome::WrongPlace);
    /// ```
    #[must_use]
    pub fn from_pattern(word: &str, pattern: &str) -> Option<Self> {
        let word = Word::new(word).ok()?;
        let outcomes: Vec<LetterOutcome> = pattern
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(LetterOutcome::RightPlace),
                'Y' | 'y' | '🟨' => Some(LetterOutcome::WrongPlace),
                '-' | '_' | '⬜' => Some(LetterOutcome::Absent),
                _ => None,
            })
            .collect::<Option<_>>()?;

        if outcomes.len() != WORD_LEN {
            return None;
        }

        let mut symbols = [FeedbackSymbol {
            letter: b'a',
            outcome: LetterOutcome::Absent,
        }; WORD_LEN];
        for (slot, (&letter, outcome)) in symbols.iter_mut().zip(word.chars().iter().zip(outcomes)) {
            *slot = FeedbackSymbol { letter, outcome };
        }
        Some(Self(symbols))
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LEN] {
        &self.0
    }

    /// The guessed word, without outcomes
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|s| s.letter as char).collect()
    }

    /// Check if every symbol is `RightPlace`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0
            .iter()
            .all(|s| s.outcome == LetterOutcome::RightPlace)
    }

    /// Convert the outcomes to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.outcome.to_emoji()).collect()
    }
}

/// Compute the feedback the puzzle would give for `guess` when `secret` is the answer
///
/// Greens are consumed first, then yellows left to right; any occurrence of a
/// letter beyond what remains unconsumed in the secret is `Absent`.
///
/// # Examples
/// ```
/// use wordle_keys::core::{Word, classify};
///
/// let guess = Word::new("abbce").unwrap();
/// let secret = Word::new("aabac").unwrap();
/// assert_eq!(classify(&guess, &secret).to_emoji(), "🟩⬜🟩🟨⬜");
/// ```
#[must_use]
pub fn classify(guess: &Word, secret: &Word) -> GuessLine {
    let mut outcomes = [LetterOutcome::Absent; WORD_LEN];
    let mut unconsumed: FxHashMap<u8, usize> = FxHashMap::default();

    // First pass: greens, counting the secret letters they do not use
    for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
        if g == s {
            outcomes[i] = LetterOutcome::RightPlace;
        } else {
            *unconsumed.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: yellows from whatever is left
    for (i, &g) in guess.chars().iter().enumerate() {
        if outcomes[i] == LetterOutcome::RightPlace {
            continue;
        }
        if let Some(count) = unconsumed.get_mut(&g)
            && *count > 0
        {
            outcomes[i] = LetterOutcome::WrongPlace;
            *count -= 1;
        }
    }

    let mut symbols = [FeedbackSymbol {
        letter: b'a',
        outcome: LetterOutcome::Absent,
    }; WORD_LEN];
    for (i, slot) in symbols.iter_mut().enumerate() {
        *slot = FeedbackSymbol {
            letter: guess.chars()[i],
            outcome: outcomes[i],
        };
    }
    GuessLine(symbols)
}
