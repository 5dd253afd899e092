//! Emphasis styling shared by every focusable widget.
//!
//! Widgets never store a style. They derive it from whether they currently
//! hold focus, so a focus change can't leave a stale highlight behind.

use ratatui::style::{Color, Style};

pub const FOCUSED_COLOR: Color = Color::Indexed(205);
pub const BLURRED_COLOR: Color = Color::Indexed(240);

pub fn emphasis(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUSED_COLOR)
    } else {
        Style::default().fg(BLURRED_COLOR)
    }
}
