//! # Input Dispatcher
//!
//! Routes each terminal event to the domain reducer, the focus controller,
//! or the focused widget.
//!
//! ```text
//! TuiEvent ──► KeyMap ──► KeyAction ──► core::update ──► Effect
//!                 │
//!                 └─ unbound ──► focused widget (TextInput / ComponentList)
//! ```
//!
//! Whatever happened, the widgets are re-synced with the wizard's focus
//! before returning, so blur/focus always follows a focus change.

use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::component::Component;
use crate::core::focus::FocusTarget;
use crate::core::state::Wizard;
use crate::tui::event::TuiEvent;
use crate::tui::form::FormState;
use crate::tui::keymap::{KeyAction, KeyMap};

pub struct Dispatcher {
    keymap: KeyMap,
}

impl Dispatcher {
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn dispatch(&self, wizard: &mut Wizard, form: &mut FormState, event: &TuiEvent) -> Effect {
        let effect = match event {
            TuiEvent::Resize(columns, rows) => {
                form.resize(*columns, *rows);
                Effect::None
            }
            TuiEvent::Blink => {
                form.blink();
                Effect::None
            }
            TuiEvent::Paste(_) => {
                form.forward(wizard.focus.current(), event);
                Effect::None
            }
            TuiEvent::Key(key) => match self.keymap.action_for(key) {
                Some(action) => {
                    debug!("Key {:?} -> {action}", key.code);
                    self.perform(action, wizard, form, event)
                }
                None => {
                    form.forward(wizard.focus.current(), event);
                    Effect::None
                }
            },
        };
        form.sync_focus(wizard.focus.current());
        effect
    }

    fn perform(
        &self,
        action: KeyAction,
        wizard: &mut Wizard,
        form: &mut FormState,
        event: &TuiEvent,
    ) -> Effect {
        let focus = wizard.focus.current();
        match action {
            KeyAction::Quit => update(wizard, Action::Quit),
            KeyAction::Advance => update(wizard, Action::Advance),
            KeyAction::Retreat => update(wizard, Action::Retreat),
            KeyAction::Toggle => {
                // Swallowed in text fields so the toggle key never lands in the text
                if focus.is_text_field() {
                    return Effect::None;
                }
                match highlighted_component(form) {
                    Some(component) => update(wizard, Action::Toggle(component)),
                    None => Effect::None,
                }
            }
            KeyAction::Accept => {
                // The project name is committed whichever region has focus
                let team_name = (focus == FocusTarget::TeamName)
                    .then(|| form.team_name_input.value().to_string());
                let effect = update(
                    wizard,
                    Action::Accept {
                        project_name: form.project_name_input.value().to_string(),
                        team_name,
                    },
                );
                if focus == FocusTarget::ComponentList {
                    form.forward(focus, event);
                }
                effect
            }
            KeyAction::Submit => update(
                wizard,
                Action::Submit {
                    project_name: form.project_name_input.value().to_string(),
                    team_name: form.team_name_input.value().to_string(),
                },
            ),
        }
    }
}

/// Resolve the highlighted list entry back into a component.
fn highlighted_component(form: &FormState) -> Option<Component> {
    let label = form.component_list.highlighted_label()?;
    let component = Component::from_label(label);
    if component.is_none() {
        debug!("Highlighted entry '{label}' is not a known component");
    }
    component
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(KeyMap::default())
    }
}
