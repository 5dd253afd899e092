//! # Wizard State
//!
//! Core business state for the wizard. Domain logic only - no TUI types.
//! Widget presentation state (text buffers, list cursor) lives in `tui`.
//!
//! ```text
//! Wizard
//! ├── playground: Playground        // form fields + chosen components
//! ├── focus: Focus                  // which region receives input
//! └── status: Option<Status>        // transient notification line
//! ```
//!
//! State changes only happen through `update(wizard, action)` in action.rs.

use std::time::{Duration, Instant};

use crate::core::focus::Focus;
use crate::core::playground::Playground;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// A transient notification, e.g. "CLI added" or a validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub level: StatusLevel,
    pub set_at: Instant,
}

#[derive(Debug, Default)]
pub struct Wizard {
    pub playground: Playground,
    pub focus: Focus,
    pub status: Option<Status>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(Status {
            text: text.into(),
            level,
            set_at: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Drop the status once it has been visible for `ttl`.
    ///
    /// Returns `true` if a status was cleared (the frame needs a redraw).
    pub fn expire_status(&mut self, now: Instant, ttl: Duration) -> bool {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|status| now.saturating_duration_since(status.set_at) >= ttl);
        if expired {
            self.status = None;
        }
        expired
    }
}
