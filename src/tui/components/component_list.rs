//! # Component List
//!
//! Multi-select list of scaffolding components.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ComponentListState` lives in `FormState` (cursor, filter, page size)
//! - `ComponentList` is created each frame with borrowed state and the
//!   chosen set as a prop
//!
//! Entries are stored as labels. The `[X]` annotation is never stored: it is
//! derived from the chosen set every frame, so it can't drift from the
//! domain model.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::component::Component;
use crate::core::state::{Status, StatusLevel};
use crate::tui::component::{self, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::style::{BLURRED_COLOR, emphasis};

pub const LIST_TITLE: &str = "Choose components";
pub const SELECTED_MARKER: &str = "[X]";
/// Rows per entry: label + annotation.
const ENTRY_HEIGHT: u16 = 2;

/// Events emitted by the component list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    SelectionChanged,
    FilterChanged,
}

/// Persistent state for the component list.
pub struct ComponentListState {
    entries: Vec<String>,
    /// Index into the filtered entries
    selected: usize,
    filter: String,
    filtering: bool,
    page_size: usize,
    pub list_state: ListState,
}

impl ComponentListState {
    pub fn new(options: &[Component]) -> Self {
        let entries: Vec<String> = options.iter().map(|c| c.label().to_string()).collect();
        Self::from_labels(entries)
    }

    /// Build from raw labels. Labels need not name a known component.
    pub fn from_labels(entries: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            selected: 0,
            filter: String::new(),
            filtering: false,
            page_size: 1,
            list_state,
        }
    }

    /// Entries matching the current filter (case-insensitive substring).
    pub fn visible(&self) -> Vec<&str> {
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|label| label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Label of the highlighted entry, if any entry is visible.
    pub fn highlighted_label(&self) -> Option<&str> {
        self.visible().get(self.selected).copied()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Number of entries that fit in the list area; drives PageUp/PageDown.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Size the page to the entries that fit in `area`, the list's outer
    /// bounds (border, status line and filter line included).
    pub fn fit(&mut self, area: Rect) {
        let chrome = 2 + 1 + u16::from(self.shows_filter_line());
        let rows = area.height.saturating_sub(chrome);
        self.set_page_size(usize::from(rows / ENTRY_HEIGHT));
    }

    fn shows_filter_line(&self) -> bool {
        self.filtering || !self.filter.is_empty()
    }

    fn select(&mut self, index: usize) -> Option<ListEvent> {
        let count = self.visible().len();
        if count == 0 {
            self.list_state.select(None);
            return None;
        }
        let index = index.min(count - 1);
        self.list_state.select(Some(index));
        (index != self.selected).then(|| {
            self.selected = index;
            ListEvent::SelectionChanged
        })
    }

    fn refilter(&mut self) -> Option<ListEvent> {
        self.selected = 0;
        let has_entries = !self.visible().is_empty();
        self.list_state.select(has_entries.then_some(0));
        Some(ListEvent::FilterChanged)
    }

    fn handle_filter_key(&mut self, code: KeyCode, plain: bool) -> Option<ListEvent> {
        match code {
            KeyCode::Esc => {
                self.filtering = false;
                self.filter.clear();
                self.refilter()
            }
            KeyCode::Enter => {
                self.filtering = false;
                Some(ListEvent::FilterChanged)
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.refilter()
            }
            KeyCode::Char(c) if plain => {
                self.filter.push(c);
                self.refilter()
            }
            KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down => self.select(self.selected + 1),
            _ => None,
        }
    }

    fn handle_navigation_key(&mut self, code: KeyCode, plain: bool) -> Option<ListEvent> {
        match code {
            KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Char('k') if plain => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down => self.select(self.selected + 1),
            KeyCode::Char('j') if plain => self.select(self.selected + 1),
            KeyCode::Home => self.select(0),
            KeyCode::Char('g') if plain => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            KeyCode::Char('G') if plain => self.select(usize::MAX),
            KeyCode::PageUp => self.select(self.selected.saturating_sub(self.page_size)),
            KeyCode::PageDown => self.select(self.selected.saturating_add(self.page_size)),
            KeyCode::Char('/') if plain => {
                self.filtering = true;
                Some(ListEvent::FilterChanged)
            }
            KeyCode::Esc if !self.filter.is_empty() => {
                self.filter.clear();
                self.refilter()
            }
            _ => None,
        }
    }
}

impl EventHandler for ComponentListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Key(key) => {
                let plain = !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                if self.filtering {
                    self.handle_filter_key(key.code, plain)
                } else {
                    self.handle_navigation_key(key.code, plain)
                }
            }
            TuiEvent::Paste(text) if self.filtering => {
                self.filter.extend(text.chars().filter(|c| !c.is_control()));
                self.refilter()
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the component list.
pub struct ComponentList<'a> {
    state: &'a mut ComponentListState,
    chosen: &'a BTreeSet<Component>,
    focused: bool,
    status: Option<&'a Status>,
}

impl<'a> ComponentList<'a> {
    pub fn new(
        state: &'a mut ComponentListState,
        chosen: &'a BTreeSet<Component>,
        focused: bool,
        status: Option<&'a Status>,
    ) -> Self {
        Self {
            state,
            chosen,
            focused,
            status,
        }
    }

    fn is_chosen(&self, label: &str) -> bool {
        Component::from_label(label).is_some_and(|c| self.chosen.contains(&c))
    }

    fn status_line(&self) -> Line<'static> {
        match self.status {
            Some(status) => {
                let color = match status.level {
                    StatusLevel::Info => Color::Green,
                    StatusLevel::Error => Color::Red,
                };
                Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
            }
            None => Line::from(Span::styled(
                format!("{} of {} chosen", self.chosen.len(), self.state.entries.len()),
                Style::default().fg(BLURRED_COLOR),
            )),
        }
    }

    fn filter_line(&self) -> Option<Line<'static>> {
        if !self.state.shows_filter_line() {
            return None;
        }
        let cursor = if self.state.filtering { "_" } else { "" };
        Some(Line::from(vec![
            Span::styled("Filter: ", emphasis(self.focused)),
            Span::raw(format!("{}{cursor}", self.state.filter)),
        ]))
    }
}

impl component::Component for ComponentList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = emphasis(self.focused);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(Span::styled(LIST_TITLE, style.add_modifier(Modifier::BOLD)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let filter_line = self.filter_line();
        let filter_height = u16::from(filter_line.is_some());
        let [status_area, filter_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(filter_height),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(self.status_line()), status_area);
        if let Some(line) = filter_line {
            frame.render_widget(Paragraph::new(line), filter_area);
        }

        self.state.fit(area);

        let visible = self.state.visible();
        if visible.is_empty() {
            let empty = Paragraph::new("No components match")
                .style(Style::default().fg(BLURRED_COLOR));
            frame.render_widget(empty, list_area);
            return;
        }

        let items: Vec<ListItem> = visible
            .iter()
            .map(|label| {
                let annotation = if self.is_chosen(label) {
                    SELECTED_MARKER
                } else {
                    ""
                };
                ListItem::new(vec![
                    Line::from(label.to_string()),
                    Line::from(Span::styled(
                        annotation,
                        Style::default().fg(Color::Cyan),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_symbol("│ ")
            .highlight_style(style.add_modifier(Modifier::BOLD));

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}
