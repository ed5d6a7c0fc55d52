//! Turning key presses into feedback symbols
//!
//! The keyboard doubles as the colour picker:
//! - `a` (plain lowercase) is yellow, `WrongPlace`
//! - `A` (shifted) is green, `RightPlace`
//! - `Alt+a` is gray, `Absent`
//! - Enter submits the line, Backspace deletes, Esc or Ctrl+C aborts

use crate::core::{FeedbackSymbol, LetterOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const BACKSPACE: u8 = 0x7f;
const CTRL_H: u8 = 0x08;

/// Non-letter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Submit,
    DeleteLast,
    Abort,
}

/// A classified key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Letter(FeedbackSymbol),
    Control(ControlAction),
}

/// Classify one key event
///
/// Returns `None` for keys with no meaning here.
///
/// # Examples
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use wordle_keys::core::LetterOutcome;
/// use wordle_keys::input::{Keystroke, classify_key};
///
/// let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
/// let Some(Keystroke::Letter(symbol)) = classify_key(&key) else {
///     panic!("alt+a is a letter");
/// };
/// assert_eq!(symbol.letter(), b'a');
/// assert_eq!(symbol.outcome(), LetterOutcome::Absent);
/// ```
#[must_use]
pub fn classify_key(key: &KeyEvent) -> Option<Keystroke> {
    let control = |action| Some(Keystroke::Control(action));

    match key.code {
        KeyCode::Esc => control(ControlAction::Abort),
        KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            control(ControlAction::Abort)
        }
        KeyCode::Enter => control(ControlAction::Submit),
        KeyCode::Backspace | KeyCode::Delete => control(ControlAction::DeleteLast),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            let outcome = if key.modifiers.contains(KeyModifiers::ALT) {
                LetterOutcome::Absent
            } else if c.is_ascii_uppercase() {
                LetterOutcome::RightPlace
            } else {
                LetterOutcome::WrongPlace
            };
            FeedbackSymbol::new(c as u8, outcome).map(Keystroke::Letter)
        }
        _ => None,
    }
}

/// Decode one raw terminal chord into a key event
///
/// Understands single bytes and the two-byte ESC+letter chord terminals send
/// for Alt+letter.
#[must_use]
pub fn key_from_bytes(bytes: &[u8]) -> Option<KeyEvent> {
    let (code, modifiers) = match *bytes {
        [ESC] => (KeyCode::Esc, KeyModifiers::NONE),
        [b'\n' | b'\r'] => (KeyCode::Enter, KeyModifiers::NONE),
        [BACKSPACE | CTRL_H] => (KeyCode::Backspace, KeyModifiers::NONE),
        [CTRL_C] => (KeyCode::Char('c'), KeyModifiers::CONTROL),
        [c] if c.is_ascii_lowercase() => (KeyCode::Char(c as char), KeyModifiers::NONE),
        [c] if c.is_ascii_uppercase() => (KeyCode::Char(c as char), KeyModifiers::SHIFT),
        [ESC, c] if c.is_ascii_lowercase() => (KeyCode::Char(c as char), KeyModifiers::ALT),
        _ => return None,
    };
    Some(KeyEvent::new(code, modifiers))
}

/// Split a byte stream into chords, pairing ESC with a following lowercase letter
#[must_use]
pub fn split_chords(bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut chords = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let len = match bytes.get(i..i + 2) {
            Some([ESC, c]) if c.is_ascii_lowercase() => 2,
            _ => 1,
        };
        chords.push(bytes[i..i + len].to_vec());
        i += len;
    }
    chords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_bytes(bytes: &[u8]) -> Option<Keystroke> {
        key_from_bytes(bytes).and_then(|key| classify_key(&key))
    }

    fn letter(bytes: &[u8]) -> (u8, LetterOutcome) {
        match classify_bytes(bytes) {
            Some(Keystroke::Letter(s)) => (s.letter(), s.outcome()),
            other => panic!("expected a letter, got {other:?}"),
        }
    }

    #[test]
    fn lowercase_is_wrong_place() {
        assert_eq!(letter(b"q"), (b'q', LetterOutcome::WrongPlace));
    }

    #[test]
    fn uppercase_is_right_place_and_normalised() {
        assert_eq!(letter(b"Q"), (b'q', LetterOutcome::RightPlace));
    }

    #[test]
    fn alt_chord_is_absent() {
        assert_eq!(letter(b"\x1bq"), (b'q', LetterOutcome::Absent));
    }

    #[test]
    fn control_keys() {
        assert_eq!(
            classify_bytes(b"\n"),
            Some(Keystroke::Control(ControlAction::Submit))
        );
        assert_eq!(
            classify_bytes(b"\r"),
            Some(Keystroke::Control(ControlAction::Submit))
        );
        assert_eq!(
            classify_bytes(&[BACKSPACE]),
            Some(Keystroke::Control(ControlAction::DeleteLast))
        );
        assert_eq!(
            classify_bytes(&[ESC]),
            Some(Keystroke::Control(ControlAction::Abort))
        );
        assert_eq!(
            classify_bytes(&[CTRL_C]),
            Some(Keystroke::Control(ControlAction::Abort))
        );
    }

    #[test]
    fn shifted_key_event_is_right_place() {
        let key = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert!(matches!(
            classify_key(&key),
            Some(Keystroke::Letter(s)) if s.outcome() == LetterOutcome::RightPlace && s.letter() == b't'
        ));
    }

    #[test]
    fn unknown_input_not_understood() {
        assert_eq!(classify_bytes(b"1"), None);
        assert_eq!(classify_bytes(b" "), None);
        assert_eq!(classify_bytes(b"\x1bQ"), None);
        assert_eq!(classify_bytes(b"abc"), None);
        assert_eq!(
            classify_key(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            classify_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn chords_pair_escape_with_letter() {
        let chords = split_chords(b"aB\x1bc\n\x1b\x1b");
        assert_eq!(
            chords,
            [
                b"a".to_vec(),
                b"B".to_vec(),
                b"\x1bc".to_vec(),
                b"\n".to_vec(),
                b"\x1b".to_vec(),
                b"\x1b".to_vec(),
            ]
        );
    }
}
