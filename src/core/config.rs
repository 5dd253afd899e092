//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.playground/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaygroundConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub status_ttl_ms: Option<u64>,
    pub blink_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub char_limit: Option<usize>,
    pub width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KeysConfig {
    pub quit: Option<Vec<String>>,
    pub advance: Option<Vec<String>>,
    pub retreat: Option<Vec<String>>,
    pub toggle: Option<Vec<String>>,
    pub accept: Option<Vec<String>>,
    pub submit: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "playground.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_STATUS_TTL_MS: u64 = 1500;
pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 530;
pub const DEFAULT_CHAR_LIMIT: usize = 64;
pub const DEFAULT_INPUT_WIDTH: u16 = 32;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Key strings per action, e.g. `["ctrl+c"]`. Parsed into a `KeyMap` by the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub quit: Vec<String>,
    pub advance: Vec<String>,
    pub retreat: Vec<String>,
    pub toggle: Vec<String>,
    pub accept: Vec<String>,
    pub submit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec!["ctrl+c".to_string()],
            advance: vec!["tab".to_string()],
            retreat: vec!["shift+tab".to_string()],
            toggle: vec!["space".to_string()],
            accept: vec!["enter".to_string()],
            submit: vec!["ctrl+s".to_string()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub status_ttl_ms: u64,
    pub blink_interval_ms: u64,
    pub char_limit: usize,
    pub input_width: u16,
    pub keys: KeyBindings,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.playground/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".playground").join("config.toml"))
}

/// Load config from `explicit` (the `--config` flag) or the default path.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error, as is a malformed one.
pub fn load_config(explicit: Option<&Path>) -> Result<PlaygroundConfig, ConfigError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PlaygroundConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PlaygroundConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<PlaygroundConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PlaygroundConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Playground Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# output_dir = "."                   # Or set PLAYGROUND_OUTPUT_DIR / --output-dir
# log_file = "playground.log"        # Or set PLAYGROUND_LOG_FILE
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# status_ttl_ms = 1500               # How long "CLI added" style notices stay visible
# blink_interval_ms = 530            # Caret blink period

# [input]
# char_limit = 64
# width = 32

# [keys]
# quit = ["ctrl+c"]
# advance = ["tab"]
# retreat = ["shift+tab"]
# toggle = ["space"]
# accept = ["enter"]
# submit = ["ctrl+s"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_output_dir` is the `--output-dir` flag (None = not specified).
pub fn resolve(config: &PlaygroundConfig, cli_output_dir: Option<&Path>) -> ResolvedConfig {
    // Output directory: CLI → env → config → current directory
    let output_dir = cli_output_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("PLAYGROUND_OUTPUT_DIR").map(PathBuf::from))
        .or_else(|| config.general.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    // Log file: env → config → default
    let log_file = std::env::var_os("PLAYGROUND_LOG_FILE")
        .map(PathBuf::from)
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default (unparseable values fall back)
    let log_level = std::env::var("PLAYGROUND_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        output_dir,
        log_file,
        log_level,
        status_ttl_ms: config
            .general
            .status_ttl_ms
            .unwrap_or(DEFAULT_STATUS_TTL_MS),
        blink_interval_ms: config
            .general
            .blink_interval_ms
            .unwrap_or(DEFAULT_BLINK_INTERVAL_MS),
        char_limit: config.input.char_limit.unwrap_or(DEFAULT_CHAR_LIMIT),
        input_width: config.input.width.unwrap_or(DEFAULT_INPUT_WIDTH),
        keys: resolve_keys(&config.keys),
    }
}

/// Each action keeps its default keys unless the config names its own.
fn resolve_keys(keys: &KeysConfig) -> KeyBindings {
    let defaults = KeyBindings::default();
    let pick = |configured: &Option<Vec<String>>, default: Vec<String>| {
        configured.clone().unwrap_or(default)
    };
    KeyBindings {
        quit: pick(&keys.quit, defaults.quit),
        advance: pick(&keys.advance, defaults.advance),
        retreat: pick(&keys.retreat, defaults.retreat),
        toggle: pick(&keys.toggle, defaults.toggle),
        accept: pick(&keys.accept, defaults.accept),
        submit: pick(&keys.submit, defaults.submit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = PlaygroundConfig::default();
        assert!(config.general.output_dir.is_none());
        assert!(config.keys.quit.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PlaygroundConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.status_ttl_ms, DEFAULT_STATUS_TTL_MS);
        assert_eq!(resolved.blink_interval_ms, DEFAULT_BLINK_INTERVAL_MS);
        assert_eq!(resolved.char_limit, DEFAULT_CHAR_LIMIT);
        assert_eq!(resolved.input_width, DEFAULT_INPUT_WIDTH);
        assert_eq!(resolved.keys, KeyBindings::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PlaygroundConfig {
            general: GeneralConfig {
                status_ttl_ms: Some(250),
                blink_interval_ms: Some(1000),
                ..Default::default()
            },
            input: InputConfig {
                char_limit: Some(16),
                width: Some(20),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.status_ttl_ms, 250);
        assert_eq!(resolved.blink_interval_ms, 1000);
        assert_eq!(resolved.char_limit, 16);
        assert_eq!(resolved.input_width, 20);
    }

    #[test]
    fn test_resolve_cli_output_dir_wins() {
        let config = PlaygroundConfig {
            general: GeneralConfig {
                output_dir: Some(PathBuf::from("/from/config")),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("/from/cli")));
        assert_eq!(resolved.output_dir, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_partial_key_overrides_keep_other_defaults() {
        let toml_str = r#"
[keys]
submit = ["f2", "ctrl+s"]
"#;
        let config: PlaygroundConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.keys.submit, vec!["f2", "ctrl+s"]);
        assert_eq!(resolved.keys.quit, vec!["ctrl+c"]);
        assert_eq!(resolved.keys.toggle, vec!["space"]);
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
output_dir = "projects"
log_file = "wizard.log"
log_level = "info"
status_ttl_ms = 2000

[input]
char_limit = 40

[keys]
quit = ["ctrl+c", "esc"]
"#;
        let config: PlaygroundConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.output_dir, Some(PathBuf::from("projects")));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.input.char_limit, Some(40));
        assert!(config.input.width.is_none());
        assert_eq!(
            config.keys.quit,
            Some(vec!["ctrl+c".to_string(), "esc".to_string()])
        );
    }

    #[test]
    fn test_unknown_field_types_fail_to_parse() {
        let toml_str = r#"
[input]
char_limit = "lots"
"#;
        assert!(toml::from_str::<PlaygroundConfig>(toml_str).is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_explicit_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input]\nwidth = 48\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.input.width, Some(48));
    }

    #[test]
    fn test_malformed_config_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input\nwidth = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
