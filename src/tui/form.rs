//! # Form State
//!
//! TUI-specific presentation state for the three form regions. The
//! `Wizard` decides which region is focused; `FormState` makes the widgets
//! agree with it.

use ratatui::layout::Rect;

use crate::core::component::Component;
use crate::core::config::ResolvedConfig;
use crate::core::focus::FocusTarget;
use crate::tui::component::EventHandler;
use crate::tui::components::{ComponentListState, TextInput};
use crate::tui::event::TuiEvent;
use crate::tui::ui;

pub struct FormState {
    pub project_name_input: TextInput,
    pub team_name_input: TextInput,
    pub component_list: ComponentListState,
    focused: Option<FocusTarget>,
}

impl FormState {
    pub fn new(options: &[Component], char_limit: usize, input_width: u16) -> Self {
        let mut form = Self {
            project_name_input: TextInput::new("Project name", "enter your project name")
                .with_limits(char_limit, input_width),
            team_name_input: TextInput::new("Team name", "enter your team name")
                .with_limits(char_limit, input_width),
            component_list: ComponentListState::new(options),
            focused: None,
        };
        form.sync_focus(FocusTarget::default());
        form
    }

    pub fn from_config(options: &[Component], config: &ResolvedConfig) -> Self {
        Self::new(options, config.char_limit, config.input_width)
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    /// Blur the previously focused widget and focus `target`.
    ///
    /// Called after every dispatched event; a no-op when nothing moved.
    pub fn sync_focus(&mut self, target: FocusTarget) {
        if self.focused == Some(target) {
            return;
        }
        if let Some(previous) = self.focused
            && let Some(input) = self.text_input_mut(previous)
        {
            input.blur();
        }
        if let Some(input) = self.text_input_mut(target) {
            input.focus();
        }
        self.focused = Some(target);
    }

    pub fn text_input(&self, target: FocusTarget) -> Option<&TextInput> {
        match target {
            FocusTarget::ProjectName => Some(&self.project_name_input),
            FocusTarget::TeamName => Some(&self.team_name_input),
            FocusTarget::ComponentList => None,
        }
    }

    pub fn text_input_mut(&mut self, target: FocusTarget) -> Option<&mut TextInput> {
        match target {
            FocusTarget::ProjectName => Some(&mut self.project_name_input),
            FocusTarget::TeamName => Some(&mut self.team_name_input),
            FocusTarget::ComponentList => None,
        }
    }

    /// Hand an event the key map didn't claim to the widget owning `target`.
    pub fn forward(&mut self, target: FocusTarget, event: &TuiEvent) {
        match self.text_input_mut(target) {
            Some(input) => {
                input.handle_event(event);
            }
            None => {
                self.component_list.handle_event(event);
            }
        }
    }

    /// Re-fit the list page to a new terminal size.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        let layout = ui::form_layout(Rect::new(0, 0, columns, rows), self);
        self.component_list.fit(layout.list);
    }

    /// Caret blink for whichever text input has focus.
    pub fn blink(&mut self) {
        if let Some(target) = self.focused {
            self.forward(target, &TuiEvent::Blink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_form;

    #[test]
    fn test_new_form_focuses_project_name() {
        let form = test_form();
        assert_eq!(form.focused(), Some(FocusTarget::ProjectName));
        assert!(form.project_name_input.is_focused());
        assert!(!form.team_name_input.is_focused());
    }

    #[test]
    fn test_sync_focus_swaps_widgets() {
        let mut form = test_form();
        form.sync_focus(FocusTarget::TeamName);
        assert!(!form.project_name_input.is_focused());
        assert!(form.team_name_input.is_focused());

        form.sync_focus(FocusTarget::ComponentList);
        assert!(!form.project_name_input.is_focused());
        assert!(!form.team_name_input.is_focused());
        assert_eq!(form.focused(), Some(FocusTarget::ComponentList));
    }

    #[test]
    fn test_blink_reaches_focused_input_only() {
        let mut form = test_form();
        form.blink();
        assert!(!form.project_name_input.caret_visible());
        assert!(!form.team_name_input.caret_visible());

        form.sync_focus(FocusTarget::TeamName);
        assert!(form.team_name_input.caret_visible());
    }

    #[test]
    fn test_resize_refits_list_page() {
        let mut form = test_form();
        form.resize(100, 30);
        assert_eq!(form.component_list.page_size(), 10);
        form.resize(100, 12);
        assert_eq!(form.component_list.page_size(), 1);
        assert_eq!(form.focused(), Some(FocusTarget::ProjectName));
    }
}
