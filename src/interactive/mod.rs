//! Interactive session
//!
//! Ties the key source, the solver and the presenter together.

mod app;
mod rendering;

pub use app::{Flow, Session, SessionConfig, run_session};
pub use rendering::{Presenter, Progress, TerminalPresenter};
