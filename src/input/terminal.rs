//! Key sources: the live terminal, or a prerecorded byte stream

use super::classifier::{key_from_bytes, split_chords};
use anyhow::{Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::collections::VecDeque;

/// Something that yields one key press per call, blocking until it arrives
pub trait KeySource {
    /// Wait for the next key press
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails or is exhausted.
    fn next_event(&mut self) -> Result<KeyEvent>;
}

/// Raw mode for as long as the guard lives
///
/// The previous (cooked) mode is restored on drop, including on error and
/// unwind paths.
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Switch the terminal to raw mode
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses the mode change.
    pub fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {err}");
        }
    }
}

/// Reads key presses from the controlling terminal
///
/// Raw mode is held only while waiting for a key, so output written between
/// reads behaves normally.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_event(&mut self) -> Result<KeyEvent> {
        loop {
            let event = {
                let _raw = RawModeGuard::enable()?;
                event::read()?
            };

            // Only process key press events (fixes Windows double-input bug)
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }
}

/// Replays a fixed sequence of byte chords
///
/// Used when input is piped rather than typed. Undecodable chords are passed
/// on as `KeyCode::Null` so the session can report them.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    chords: VecDeque<Vec<u8>>,
}

impl ScriptedKeys {
    /// Build from a raw byte stream, e.g. `b"sTARe\n"`
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            chords: split_chords(bytes).into(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Result<KeyEvent> {
        let Some(chord) = self.chords.pop_front() else {
            bail!("input ended before the puzzle was finished");
        };
        Ok(key_from_bytes(&chord)
            .unwrap_or_else(|| KeyEvent::new(KeyCode::Null, KeyModifiers::NONE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_keys_replay_in_order() {
        let mut keys = ScriptedKeys::from_bytes(b"a\x1bbC\n");
        assert_eq!(keys.next_event().unwrap().code, KeyCode::Char('a'));

        let alt = keys.next_event().unwrap();
        assert_eq!(alt.code, KeyCode::Char('b'));
        assert!(alt.modifiers.contains(KeyModifiers::ALT));

        assert_eq!(keys.next_event().unwrap().code, KeyCode::Char('C'));
        assert_eq!(keys.next_event().unwrap().code, KeyCode::Enter);
        assert!(keys.next_event().is_err());
    }

    #[test]
    fn scripted_keys_pass_unknown_bytes_through() {
        let mut keys = ScriptedKeys::from_bytes(b"7");
        assert_eq!(keys.next_event().unwrap().code, KeyCode::Null);
    }
}
