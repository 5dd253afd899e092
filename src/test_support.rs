//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::component::Component;
use crate::core::config::{DEFAULT_CHAR_LIMIT, DEFAULT_INPUT_WIDTH};
use crate::tui::event::TuiEvent;
use crate::tui::form::FormState;

/// A plain key press.
pub fn key(code: KeyCode) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// `ctrl+<c>`.
pub fn ctrl(c: char) -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Shift+Tab as crossterm reports it.
pub fn shift_tab() -> TuiEvent {
    TuiEvent::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))
}

/// One key press per char.
pub fn type_text(text: &str) -> Vec<TuiEvent> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// A form over every component with default input limits.
pub fn test_form() -> FormState {
    FormState::new(&Component::ALL, DEFAULT_CHAR_LIMIT, DEFAULT_INPUT_WIDTH)
}
