//! # Actions
//!
//! Everything the wizard can do becomes an `Action`.
//! User presses Tab? That's `Action::Advance`.
//! User presses Space on a list entry? That's `Action::Toggle(component)`.
//!
//! The `update()` function applies an action to the `Wizard` and returns an
//! `Effect` telling the event loop what to do next. No I/O happens here.
//!
//! ```text
//! Wizard + Action  →  update()  →  Effect
//! ```

use log::{debug, info, warn};

use crate::core::component::Component;
use crate::core::focus::FocusTarget;
use crate::core::playground::{Toggled, ValidatedPlayground};
use crate::core::state::{StatusLevel, Wizard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the wizard without validating anything.
    Quit,
    /// Focus the next region.
    Advance,
    /// Focus the previous region.
    Retreat,
    /// Add or remove a component. Ignored unless the list has focus.
    Toggle(Component),
    /// Commit the project-name input into the playground, from any focus.
    ///
    /// `team_name` carries the team input when that field has focus.
    Accept {
        project_name: String,
        team_name: Option<String>,
    },
    /// Commit both text fields and run validation.
    Submit {
        project_name: String,
        team_name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Validation passed; hand the snapshot to the project creator.
    CreateProject(ValidatedPlayground),
}

pub fn update(wizard: &mut Wizard, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
        Action::Advance => {
            let change = wizard.focus.advance();
            debug!("Focus {:?} -> {:?}", change.from, change.to);
            Effect::None
        }
        Action::Retreat => {
            let change = wizard.focus.retreat();
            debug!("Focus {:?} -> {:?}", change.from, change.to);
            Effect::None
        }
        Action::Toggle(component) => {
            if wizard.focus.current() != FocusTarget::ComponentList {
                debug!("Toggle ignored: {:?} has focus", wizard.focus.current());
                return Effect::None;
            }
            match wizard.playground.toggle(component) {
                Some(Toggled::Added) => {
                    info!("Component added: {component}");
                    wizard.set_status(format!("{component} added"), StatusLevel::Info);
                }
                Some(Toggled::Removed) => {
                    info!("Component removed: {component}");
                    wizard.set_status(format!("{component} removed"), StatusLevel::Info);
                }
                None => warn!("Toggle ignored: {component} is not an option"),
            }
            Effect::None
        }
        Action::Accept {
            project_name,
            team_name,
        } => {
            wizard.playground.project_name = project_name;
            let field = match team_name {
                Some(team_name) => {
                    wizard.playground.team_name = team_name;
                    FocusTarget::TeamName
                }
                None => FocusTarget::ProjectName,
            };
            info!("{} accepted", field.label());
            wizard.set_status(format!("{} set", field.label()), StatusLevel::Info);
            Effect::None
        }
        Action::Submit {
            project_name,
            team_name,
        } => {
            wizard.playground.project_name = project_name;
            wizard.playground.team_name = team_name;
            match wizard.playground.make_validated() {
                Ok(validated) => {
                    info!(
                        "Validated project '{}' for team '{}' ({} components)",
                        validated.project_name(),
                        validated.team_name(),
                        validated.chosen_components().len()
                    );
                    Effect::CreateProject(validated)
                }
                Err(e) => {
                    warn!("Validation failed: {e}");
                    wizard.set_status(e.to_string(), StatusLevel::Error);
                    Effect::None
                }
            }
        }
    }
}
