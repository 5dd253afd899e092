//! # Key Bindings
//!
//! Maps concrete key presses onto the wizard's logical actions.
//!
//! A `KeyMap` is an explicit value built from the resolved config and handed
//! to the `Dispatcher`, so tests and users can swap bindings freely. Key
//! strings look like `"ctrl+c"`, `"shift+tab"`, `"space"` or `"f2"`.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::config::KeyBindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Advance,
    Retreat,
    Toggle,
    Accept,
    Submit,
}

impl KeyAction {
    /// Match priority when one key is bound to several actions.
    pub const PRIORITY: [KeyAction; 6] = [
        KeyAction::Quit,
        KeyAction::Advance,
        KeyAction::Retreat,
        KeyAction::Toggle,
        KeyAction::Accept,
        KeyAction::Submit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::Advance => "advance",
            KeyAction::Retreat => "retreat",
            KeyAction::Toggle => "toggle",
            KeyAction::Accept => "accept",
            KeyAction::Submit => "submit",
        }
    }

    /// Short description for the help bar.
    pub fn help(self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::Advance => "next",
            KeyAction::Retreat => "prev",
            KeyAction::Toggle => "toggle",
            KeyAction::Accept => "accept",
            KeyAction::Submit => "create",
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyMapError {
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("unknown modifier '{modifier}' in '{binding}'")]
    UnknownModifier { modifier: String, binding: String },
    #[error("no keys bound to '{0}'")]
    Unbound(KeyAction),
}

/// A single key combination such as `ctrl+s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parse a binding string like `"ctrl+shift+x"`.
    pub fn parse(binding: &str) -> Result<Self, KeyMapError> {
        let trimmed = binding.trim();
        // "+" on its own is a key, not a separator
        let (modifier_part, key_part) = match trimmed.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None => match trimmed.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", trimmed),
            },
        };

        let mut modifiers = KeyModifiers::NONE;
        for modifier in modifier_part.split('+').filter(|m| !m.is_empty()) {
            modifiers |= match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "option" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => {
                    return Err(KeyMapError::UnknownModifier {
                        modifier: modifier.to_string(),
                        binding: binding.to_string(),
                    });
                }
            };
        }

        // Named keys are case-insensitive, single characters are not
        let code = match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "esc" | "escape" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdown" => KeyCode::PageDown,
            _ => parse_function_or_char(key_part, modifiers)
                .ok_or_else(|| KeyMapError::UnknownKey(binding.to_string()))?,
        };

        Ok(Self { code, modifiers })
    }

    /// Whether a terminal key event is this chord.
    ///
    /// Shift is ignored for characters and back-tab: terminals already fold
    /// it into the code (`'A'`, `BackTab`) and disagree on whether to also
    /// report the modifier.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.code != event.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                strip_shift(self.modifiers) == strip_shift(event.modifiers)
            }
            _ => self.modifiers == event.modifiers,
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        match self.code {
            KeyCode::BackTab => f.write_str("shift+tab"),
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::F(n) => write!(f, "f{n}"),
            other => write!(f, "{}", format!("{other:?}").to_lowercase()),
        }
    }
}

fn strip_shift(modifiers: KeyModifiers) -> KeyModifiers {
    modifiers.difference(KeyModifiers::SHIFT)
}

fn parse_function_or_char(key: &str, modifiers: KeyModifiers) -> Option<KeyCode> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        // Terminals report shifted letters as the uppercase char
        (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
            Some(KeyCode::Char(c.to_ascii_uppercase()))
        }
        (Some(c), None) => Some(KeyCode::Char(c)),
        (Some('f' | 'F'), Some(_)) => key[1..]
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F),
        _ => None,
    }
}

/// The chords bound to one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub chords: Vec<KeyChord>,
}

impl KeyBinding {
    fn parse(action: KeyAction, keys: &[String]) -> Result<Self, KeyMapError> {
        if keys.is_empty() {
            return Err(KeyMapError::Unbound(action));
        }
        let chords = keys
            .iter()
            .map(|key| KeyChord::parse(key))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { chords })
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.chords.iter().any(|chord| chord.matches(event))
    }

    /// The first chord, as shown in the help bar.
    pub fn primary(&self) -> Option<&KeyChord> {
        self.chords.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub quit: KeyBinding,
    pub advance: KeyBinding,
    pub retreat: KeyBinding,
    pub toggle: KeyBinding,
    pub accept: KeyBinding,
    pub submit: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        let chord = |code| KeyBinding {
            chords: vec![KeyChord::new(code, KeyModifiers::NONE)],
        };
        let ctrl = |c| KeyBinding {
            chords: vec![KeyChord::new(KeyCode::Char(c), KeyModifiers::CONTROL)],
        };
        Self {
            quit: ctrl('c'),
            advance: chord(KeyCode::Tab),
            retreat: KeyBinding {
                chords: vec![KeyChord::new(KeyCode::BackTab, KeyModifiers::SHIFT)],
            },
            toggle: chord(KeyCode::Char(' ')),
            accept: chord(KeyCode::Enter),
            submit: ctrl('s'),
        }
    }
}

impl KeyMap {
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self, KeyMapError> {
        Ok(Self {
            quit: KeyBinding::parse(KeyAction::Quit, &bindings.quit)?,
            advance: KeyBinding::parse(KeyAction::Advance, &bindings.advance)?,
            retreat: KeyBinding::parse(KeyAction::Retreat, &bindings.retreat)?,
            toggle: KeyBinding::parse(KeyAction::Toggle, &bindings.toggle)?,
            accept: KeyBinding::parse(KeyAction::Accept, &bindings.accept)?,
            submit: KeyBinding::parse(KeyAction::Submit, &bindings.submit)?,
        })
    }

    pub fn binding(&self, action: KeyAction) -> &KeyBinding {
        match action {
            KeyAction::Quit => &self.quit,
            KeyAction::Advance => &self.advance,
            KeyAction::Retreat => &self.retreat,
            KeyAction::Toggle => &self.toggle,
            KeyAction::Accept => &self.accept,
            KeyAction::Submit => &self.submit,
        }
    }

    /// The logical action for a key press, if any.
    pub fn action_for(&self, event: &KeyEvent) -> Option<KeyAction> {
        KeyAction::PRIORITY
            .into_iter()
            .find(|action| self.binding(*action).matches(event))
    }
}
