use thiserror::Error;

use crate::core::config::ConfigError;
use crate::scaffold::CreationError;
use crate::tui::keymap::KeyMapError;

/// Fatal errors that end the program with a non-zero exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid key binding: {0}")]
    KeyMap(#[from] KeyMapError),
    #[error("could not create project: {0}")]
    CreationFailed(#[from] CreationError),
}
