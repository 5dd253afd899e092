//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop only draws after something changed: a batch of input, a caret
//! blink, or an expired status line. Between those it sleeps in
//! `poll_event_timeout` until the next blink or status expiry is due.
//!
//! The caret blink is a self-scheduled `TuiEvent::Blink` produced only when
//! the poll times out with no input, so it never overtakes a key press.
//! Any real input pushes the next blink back by a full interval.

pub mod component;
pub mod components;
pub mod dispatch;
pub mod event;
pub mod form;
pub mod keymap;
pub mod style;
pub mod ui;

use log::{debug, error, info};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::playground::ValidatedPlayground;
use crate::core::state::Wizard;
use crate::error::AppError;
use crate::scaffold::ProjectCreator;
use crate::tui::dispatch::Dispatcher;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::form::FormState;
use crate::tui::keymap::KeyMap;

/// Poll timeout when nothing is scheduled (blink disabled, no status).
const IDLE_POLL: Duration = Duration::from_millis(500);

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user quit without creating anything
    Quit,
    /// A project was created at this path
    Created(PathBuf),
}

/// Why the event loop stopped.
enum Exit {
    Quit,
    Create(ValidatedPlayground),
}

/// RAII guard that enables bracketed paste and hides the hardware cursor
/// (the inputs draw their own caret). Restores both on drop so the shell is
/// left clean on every exit path.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Run the wizard until the user quits or submits a valid form.
///
/// On a valid submit the terminal is restored first, then `creator` is
/// called exactly once.
pub fn run(config: &ResolvedConfig, creator: &dyn ProjectCreator) -> Result<Outcome, AppError> {
    let keymap = KeyMap::from_bindings(&config.keys)?;
    let dispatcher = Dispatcher::new(keymap);
    let mut wizard = Wizard::new();
    let mut form = FormState::from_config(wizard.playground.component_options(), config);

    let mut terminal = ratatui::init();
    let exit = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &dispatcher, &mut wizard, &mut form, config),
        Err(e) => Err(e),
    };
    ratatui::restore();

    let validated = match exit? {
        Exit::Quit => {
            info!("Wizard closed without creating a project");
            return Ok(Outcome::Quit);
        }
        Exit::Create(validated) => validated,
    };

    let name = validated.project_name().to_string();
    match creator.create_project(validated) {
        Ok(path) => {
            info!("Created project '{name}' at {}", path.display());
            Ok(Outcome::Created(path))
        }
        Err(e) => {
            error!("Failed to create project '{name}': {e}");
            Err(AppError::CreationFailed(e))
        }
    }
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    dispatcher: &Dispatcher,
    wizard: &mut Wizard,
    form: &mut FormState,
    config: &ResolvedConfig,
) -> std::io::Result<Exit> {
    let size = terminal.size()?;
    form.resize(size.width, size.height);

    let blink_interval =
        (config.blink_interval_ms > 0).then(|| Duration::from_millis(config.blink_interval_ms));
    let status_ttl = Duration::from_millis(config.status_ttl_ms);
    let mut next_blink = blink_interval.map(|interval| Instant::now() + interval);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, wizard, form, dispatcher.keymap()))?;
            needs_redraw = false;
        }

        let timeout = poll_timeout(Instant::now(), next_blink, wizard, status_ttl);

        match poll_event_timeout(timeout)? {
            Some(first_event) => {
                // Dispatch the first event and drain everything pending before the next draw
                let mut pending = Some(first_event);
                while let Some(event) = pending {
                    match dispatcher.dispatch(wizard, form, &event) {
                        Effect::None => {}
                        Effect::Quit => return Ok(Exit::Quit),
                        Effect::CreateProject(validated) => return Ok(Exit::Create(validated)),
                    }
                    pending = poll_event_immediate()?;
                }
                next_blink = blink_interval.map(|interval| Instant::now() + interval);
                needs_redraw = true;
            }
            None => {
                if let (Some(due), Some(interval)) = (next_blink, blink_interval)
                    && Instant::now() >= due
                {
                    dispatcher.dispatch(wizard, form, &TuiEvent::Blink);
                    next_blink = Some(Instant::now() + interval);
                    needs_redraw = true;
                }
            }
        }

        if wizard.expire_status(Instant::now(), status_ttl) {
            debug!("Status line expired");
            needs_redraw = true;
        }
    }
}

/// Sleep until the next blink or status expiry, whichever comes first.
fn poll_timeout(
    now: Instant,
    next_blink: Option<Instant>,
    wizard: &Wizard,
    status_ttl: Duration,
) -> Duration {
    let blink = next_blink.map(|due| due.saturating_duration_since(now));
    let status = wizard
        .status
        .as_ref()
        .map(|status| (status.set_at + status_ttl).saturating_duration_since(now));
    match (blink, status) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => IDLE_POLL,
    }
}
