//! # HelpBar Component
//!
//! Bottom line listing the active key bindings, e.g.
//! `tab next • shift+tab prev • space toggle • ...`.
//!
//! Stateless: the key map and focus are props. The list-only hints
//! (`/ filter`) appear only while the list has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::focus::FocusTarget;
use crate::tui::component::Component;
use crate::tui::keymap::{KeyAction, KeyMap};
use crate::tui::style::{BLURRED_COLOR, FOCUSED_COLOR};

const SEPARATOR: &str = " • ";

/// Help order, most useful first.
const HELP_ORDER: [KeyAction; 6] = [
    KeyAction::Advance,
    KeyAction::Retreat,
    KeyAction::Toggle,
    KeyAction::Accept,
    KeyAction::Submit,
    KeyAction::Quit,
];

pub struct HelpBar<'a> {
    pub keymap: &'a KeyMap,
    pub focus: FocusTarget,
}

impl<'a> HelpBar<'a> {
    pub fn new(keymap: &'a KeyMap, focus: FocusTarget) -> Self {
        Self { keymap, focus }
    }

    fn entries(&self) -> Vec<(String, &'static str)> {
        let mut entries: Vec<(String, &'static str)> = HELP_ORDER
            .iter()
            // Toggle does nothing in a text field, so don't advertise it there
            .filter(|action| **action != KeyAction::Toggle || !self.focus.is_text_field())
            .filter_map(|action| {
                self.keymap
                    .binding(*action)
                    .primary()
                    .map(|chord| (chord.to_string(), action.help()))
            })
            .collect();
        if !self.focus.is_text_field() {
            entries.insert(0, ("↑/↓".to_string(), "move"));
            entries.insert(1, ("/".to_string(), "filter"));
        }
        entries
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(FOCUSED_COLOR);
        let desc_style = Style::default().fg(BLURRED_COLOR);

        let mut spans = Vec::new();
        for (i, (key, desc)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, desc_style));
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {desc}"), desc_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
