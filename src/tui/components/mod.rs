//! # TUI Components
//!
//! All widgets of the wizard form.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `HelpBar`: key binding hints derived from the active `KeyMap`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextInput`: single-line field for the project and team names
//! - `ComponentListState` / `ComponentList`: multi-select list, persistent
//!   state plus a per-frame render wrapper
//!
//! Components receive external data as props instead of reaching into the
//! `Wizard`, which keeps every one of them testable on a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── text_input.rs      (project / team name fields)
//! ├── component_list.rs  (multi-select list)
//! └── help_bar.rs        (key hints)
//! ```

pub mod component_list;
pub mod help_bar;
pub mod text_input;

pub use component_list::{ComponentList, ComponentListState, ListEvent};
pub use help_bar::HelpBar;
pub use text_input::{TextInput, TextInputEvent};
