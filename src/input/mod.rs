//! Keyboard input
//!
//! Key sources and the classifier that maps key presses to feedback symbols.

mod classifier;
mod terminal;

pub use classifier::{ControlAction, Keystroke, classify_key, key_from_bytes, split_chords};
pub use terminal::{KeySource, RawModeGuard, ScriptedKeys, TerminalKeys};
