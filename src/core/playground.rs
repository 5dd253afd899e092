//! # Playground
//!
//! The in-progress form state and the validation gate in front of project
//! creation.
//!
//! ```text
//! Playground ──make_validated()──► ValidatedPlayground ──► ProjectCreator
//!     ▲                │
//!     │                └── Err(ValidationError) → status line, keep editing
//!  toggle / accept / submit
//! ```
//!
//! `chosen_components` is only reachable through [`Playground::toggle`], which
//! refuses anything outside `component_options`. That keeps the chosen set a
//! subset of the option list without any runtime checks elsewhere.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::component::Component;

/// Validation failures, reported in rule order (first failure wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name is required")]
    ProjectNameRequired,
    #[error("team name is required")]
    TeamNameRequired,
    #[error("at least one component must be chosen")]
    ChosenComponentsRequired,
}

/// Result of a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playground {
    pub project_name: String,
    pub team_name: String,
    chosen_components: BTreeSet<Component>,
    component_options: Vec<Component>,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    /// Empty fields, nothing chosen, every component selectable.
    pub fn new() -> Self {
        Self {
            project_name: String::new(),
            team_name: String::new(),
            chosen_components: BTreeSet::new(),
            component_options: Component::ALL.to_vec(),
        }
    }

    pub fn chosen_components(&self) -> &BTreeSet<Component> {
        &self.chosen_components
    }

    pub fn component_options(&self) -> &[Component] {
        &self.component_options
    }

    pub fn is_chosen(&self, component: Component) -> bool {
        self.chosen_components.contains(&component)
    }

    /// Add the component if absent, remove it if present.
    ///
    /// Returns `None` (and changes nothing) for a component that is not one
    /// of the options.
    pub fn toggle(&mut self, component: Component) -> Option<Toggled> {
        if !self.component_options.contains(&component) {
            return None;
        }
        if self.chosen_components.remove(&component) {
            Some(Toggled::Removed)
        } else {
            self.chosen_components.insert(component);
            Some(Toggled::Added)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.is_empty() {
            return Err(ValidationError::ProjectNameRequired);
        }
        if self.team_name.is_empty() {
            return Err(ValidationError::TeamNameRequired);
        }
        if self.chosen_components.is_empty() {
            return Err(ValidationError::ChosenComponentsRequired);
        }
        Ok(())
    }

    /// Validate, then snapshot into the only type project creation accepts.
    pub fn make_validated(&self) -> Result<ValidatedPlayground, ValidationError> {
        self.validate()?;
        Ok(ValidatedPlayground {
            snapshot: self.clone(),
        })
    }
}

/// Immutable snapshot of a `Playground` that passed every validation rule.
///
/// There is no public constructor: holding one of these is proof of
/// validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPlayground {
    snapshot: Playground,
}

impl ValidatedPlayground {
    pub fn project_name(&self) -> &str {
        &self.snapshot.project_name
    }

    pub fn team_name(&self) -> &str {
        &self.snapshot.team_name
    }

    pub fn chosen_components(&self) -> &BTreeSet<Component> {
        &self.snapshot.chosen_components
    }

    pub fn snapshot(&self) -> &Playground {
        &self.snapshot
    }
}
