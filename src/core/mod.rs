//! # Core Application Logic
//!
//! The wizard's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Playground (domain)  │
//!                    │  • Focus (state machine)│
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Scaffold  │
//!           │  Adapter   │              │ (creator)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`component`]: the closed set of scaffolding components
//! - [`playground`]: form data, toggling and validation
//! - [`focus`]: which form region receives input
//! - [`state`]: the `Wizard` struct, all core state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration (the one module that reads files)

pub mod action;
pub mod component;
pub mod config;
pub mod focus;
pub mod playground;
pub mod state;
