//! # TextInput Component
//!
//! Single-line text field used for the project and team names.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste) up to `char_limit` characters
//! - Handle editing (backspace, delete, cursor movement, line kills)
//! - Blink the caret while focused
//! - Scroll horizontally so the caret stays inside `width` columns
//!
//! ## State Management
//!
//! The buffer, caret and scroll offset are internal state. Focus is set by
//! the parent through `focus()` / `blur()`; emphasis styling is derived from
//! it at render time.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::style::{BLURRED_COLOR, emphasis};
use crossterm::event::{KeyCode, KeyModifiers};

const PROMPT: &str = "> ";
/// Columns taken by the border and prompt around the text.
const CHROME_WIDTH: u16 = 2 + PROMPT.len() as u16;

/// High-level events emitted by the TextInput
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputEvent {
    /// The buffer contents changed
    Changed,
    /// Only the caret moved
    CursorMoved,
}

pub struct TextInput {
    /// Text buffer (Internal State)
    value: String,
    /// Caret position in chars (0..=char count)
    cursor: usize,
    /// First visible char (horizontal scroll)
    offset: usize,
    /// Block title (Prop)
    pub title: String,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: String,
    /// Maximum number of chars; 0 means unlimited (Prop)
    pub char_limit: usize,
    /// Visible text columns (Prop)
    pub width: u16,
    focused: bool,
    caret_visible: bool,
}

impl TextInput {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            offset: 0,
            title: title.into(),
            placeholder: placeholder.into(),
            char_limit: 0,
            width: 32,
            focused: false,
            caret_visible: true,
        }
    }

    pub fn with_limits(mut self, char_limit: usize, width: u16) -> Self {
        self.char_limit = char_limit;
        self.width = width;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the buffer, truncated to `char_limit`, with the caret at the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.limit()).collect();
        self.cursor = self.char_count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn caret_visible(&self) -> bool {
        self.focused && self.caret_visible
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.caret_visible = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Total width including border and prompt.
    pub fn outer_width(&self) -> u16 {
        self.width + CHROME_WIDTH
    }

    fn limit(&self) -> usize {
        if self.char_limit == 0 {
            usize::MAX
        } else {
            self.char_limit
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, text: &str) -> Option<TextInputEvent> {
        let room = self.limit().saturating_sub(self.char_count());
        let accepted: String = text.chars().filter(|c| !c.is_control()).take(room).collect();
        if accepted.is_empty() {
            return None;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &accepted);
        self.cursor += accepted.chars().count();
        Some(TextInputEvent::Changed)
    }

    /// Remove chars in `start..end` (char indices) and park the caret at `start`.
    fn remove_range(&mut self, start: usize, end: usize) -> Option<TextInputEvent> {
        if start >= end {
            return None;
        }
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.value.drain(from..to);
        self.cursor = start;
        Some(TextInputEvent::Changed)
    }

    fn move_to(&mut self, cursor: usize) -> Option<TextInputEvent> {
        let cursor = cursor.min(self.char_count());
        (cursor != self.cursor).then(|| {
            self.cursor = cursor;
            TextInputEvent::CursorMoved
        })
    }

    /// Adjust the scroll offset so the caret cell fits in `columns`.
    fn scroll_to_cursor(&mut self, columns: usize) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        let cursor = self.cursor;
        let chars: Vec<char> = self.value.chars().collect();
        let caret_cell = |offset: usize| -> usize {
            let before: usize = chars[offset..cursor]
                .iter()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            let caret = chars.get(cursor).and_then(|c| c.width()).unwrap_or(1);
            before + caret
        };
        while self.offset < cursor && caret_cell(self.offset) > columns {
            self.offset += 1;
        }
    }

    fn visible_line(&self, columns: usize) -> Line<'static> {
        let style = emphasis(self.focused);
        let caret_style = if self.caret_visible() {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };

        let mut spans = vec![Span::styled(PROMPT, style)];

        if self.value.is_empty() {
            let mut placeholder = self.placeholder.chars();
            let first = placeholder.next().map(String::from).unwrap_or_else(|| " ".into());
            let placeholder_style = Style::default().fg(BLURRED_COLOR);
            spans.push(Span::styled(
                first,
                if self.caret_visible() {
                    placeholder_style.add_modifier(Modifier::REVERSED)
                } else {
                    placeholder_style
                },
            ));
            spans.push(Span::styled(placeholder.collect::<String>(), placeholder_style));
            return Line::from(spans);
        }

        let mut used = 0;
        let mut before = String::new();
        let mut caret = String::new();
        let mut after = String::new();
        for (index, c) in self.value.chars().enumerate().skip(self.offset) {
            used += c.width().unwrap_or(0);
            if used > columns {
                break;
            }
            match index.cmp(&self.cursor) {
                std::cmp::Ordering::Less => before.push(c),
                std::cmp::Ordering::Equal => caret.push(c),
                std::cmp::Ordering::Greater => after.push(c),
            }
        }
        if caret.is_empty() {
            caret.push(' ');
        }

        spans.push(Span::styled(before, style));
        spans.push(Span::styled(caret, caret_style));
        spans.push(Span::styled(after, style));
        Line::from(spans)
    }
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = area.width.saturating_sub(CHROME_WIDTH).max(1) as usize;
        self.scroll_to_cursor(columns);

        let style = emphasis(self.focused);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(Span::styled(self.title.clone(), style));

        frame.render_widget(Paragraph::new(self.visible_line(columns)).block(block), area);
    }
}

impl EventHandler for TextInput {
    type Event = TextInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Blink => {
                if self.focused {
                    self.caret_visible = !self.caret_visible;
                }
                None
            }
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Resize(..) => None,
            TuiEvent::Key(key) => {
                self.caret_visible = true;
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Char('a') if ctrl => self.move_to(0),
                    KeyCode::Char('e') if ctrl => self.move_to(self.char_count()),
                    KeyCode::Char('u') if ctrl => self.remove_range(0, self.cursor),
                    KeyCode::Char('k') if ctrl => self.remove_range(self.cursor, self.char_count()),
                    KeyCode::Char(c)
                        if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                    {
                        self.insert(c.encode_utf8(&mut [0; 4]))
                    }
                    KeyCode::Backspace => {
                        self.remove_range(self.cursor.saturating_sub(1), self.cursor)
                    }
                    KeyCode::Delete => self.remove_range(self.cursor, self.cursor + 1),
                    KeyCode::Left => self.move_to(self.cursor.saturating_sub(1)),
                    KeyCode::Right => self.move_to(self.cursor + 1),
                    KeyCode::Home => self.move_to(0),
                    KeyCode::End => self.move_to(self.char_count()),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ctrl, key, type_text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn focused_input() -> TextInput {
        let mut input = TextInput::new("Project name", "enter your project name");
        input.focus();
        input
    }

    fn rendered(input: &mut TextInput, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = focused_input();
        for event in type_text("abc") {
            assert_eq!(input.handle_event(&event), Some(TextInputEvent::Changed));
        }
        assert_eq!(input.value(), "abc");

        input.handle_event(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut input = focused_input();
        input.set_value("ac");
        input.handle_event(&key(KeyCode::Left));
        for event in type_text("b") {
            input.handle_event(&event);
        }
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_cursor_boundaries_report_no_event() {
        let mut input = focused_input();
        assert_eq!(input.handle_event(&key(KeyCode::Left)), None);
        assert_eq!(input.handle_event(&key(KeyCode::Backspace)), None);
        assert_eq!(input.handle_event(&key(KeyCode::Delete)), None);

        input.set_value("xy");
        assert_eq!(input.handle_event(&key(KeyCode::Right)), None);
        assert_eq!(
            input.handle_event(&key(KeyCode::Home)),
            Some(TextInputEvent::CursorMoved)
        );
        input.handle_event(&key(KeyCode::Delete));
        assert_eq!(input.value(), "y");
    }

    #[test]
    fn test_char_limit_truncates_typing_and_paste() {
        let mut input = focused_input().with_limits(4, 32);
        for event in type_text("abcdef") {
            input.handle_event(&event);
        }
        assert_eq!(input.value(), "abcd");

        input.set_value("");
        input.handle_event(&TuiEvent::Paste("xy\nzw!".to_string()));
        assert_eq!(input.value(), "xyzw");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = focused_input();
        input.set_value("héllo");
        input.handle_event(&key(KeyCode::Home));
        input.handle_event(&key(KeyCode::Right));
        input.handle_event(&key(KeyCode::Delete));
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn test_line_kills() {
        let mut input = focused_input();
        input.set_value("project");
        input.handle_event(&key(KeyCode::Left));
        input.handle_event(&key(KeyCode::Left));
        input.handle_event(&ctrl('k'));
        assert_eq!(input.value(), "proje");
        input.handle_event(&ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut input = focused_input();
        assert_eq!(input.handle_event(&ctrl('x')), None);
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_blink_only_while_focused() {
        let mut input = focused_input();
        assert!(input.caret_visible());
        input.handle_event(&TuiEvent::Blink);
        assert!(!input.caret_visible());

        // Any key shows the caret again
        input.handle_event(&key(KeyCode::End));
        assert!(input.caret_visible());

        input.blur();
        input.handle_event(&TuiEvent::Blink);
        assert!(!input.caret_visible());
        input.focus();
        assert!(input.caret_visible());
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let mut input = focused_input();
        let text = rendered(&mut input, 40);
        assert!(text.contains("Project name"));
        assert!(text.contains("enter your project name"));
    }

    #[test]
    fn test_render_scrolls_to_keep_caret_visible() {
        let mut input = focused_input();
        input.set_value("abcdefghijklmnopqrstuvwxyz");
        let text = rendered(&mut input, 14);
        assert!(text.contains("uvwxyz"));
        assert!(!text.contains("abc"));

        input.handle_event(&key(KeyCode::Home));
        let text = rendered(&mut input, 14);
        assert!(text.contains("abc"));
    }
}
