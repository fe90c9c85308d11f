//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.saladbook/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file is itself a config value, so loading and resolution run
//! before the logger exists. They record `ConfigNote`s instead of logging;
//! `main` replays them once the logger is installed.

use log::{Level, log};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SaladbookConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Dataset JSON file. Relative paths resolve against `~/.saladbook/`.
    pub data_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "saladbook.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Bundled,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data: DataSource,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Deferred Diagnostics
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

impl ConfigNote {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Send buffered notes to the installed logger.
pub fn replay(notes: &[ConfigNote]) {
    for note in notes {
        log!(note.level, "{}", note.message);
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.saladbook/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".saladbook"))
}

/// Returns the path to `~/.saladbook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.saladbook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SaladbookConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notes: &mut Vec<ConfigNote>) -> Result<SaladbookConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notes.push(ConfigNote::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            ));
            return Ok(SaladbookConfig::default());
        }
    };

    if !path.exists() {
        notes.push(ConfigNote::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        generate_default_config(&path, notes);
        return Ok(SaladbookConfig::default());
    }

    load_config_from(&path, notes)
}

pub fn load_config_from(
    path: &Path,
    notes: &mut Vec<ConfigNote>,
) -> Result<SaladbookConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SaladbookConfig = toml::from_str(&contents)?;
    notes.push(ConfigNote::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notes.push(ConfigNote::new(Level::Debug, format!("Config: {:?}", config)));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut Vec<ConfigNote>) {
    let default_content = r#"# Saladbook Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_file = "dressings.json"       # Path relative to ~/.saladbook/ (or SALADBOOK_DATA)
# log_file = "saladbook.log"         # Or set SALADBOOK_LOG env var
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Failed to create config directory: {}", e),
        ));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notes.push(ConfigNote::new(
            Level::Warn,
            format!("Failed to write default config: {}", e),
        ));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_data` is the `--data` flag (None = not specified).
pub fn resolve(
    config: &SaladbookConfig,
    cli_data: Option<&Path>,
    notes: &mut Vec<ConfigNote>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_data, config_dir().as_deref(), notes, |key| {
        std::env::var(key).ok()
    })
}

/// `resolve` with the environment and config directory passed in.
pub fn resolve_with_env(
    config: &SaladbookConfig,
    cli_data: Option<&Path>,
    config_dir: Option<&Path>,
    notes: &mut Vec<ConfigNote>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Dataset: CLI → env → config (relative to config dir) → bundled
    let data = if let Some(path) = cli_data {
        DataSource::File(path.to_path_buf())
    } else if let Some(path) = env("SALADBOOK_DATA") {
        DataSource::File(PathBuf::from(path))
    } else if let Some(file) = config.general.data_file.as_deref() {
        let path = PathBuf::from(file);
        match config_dir {
            Some(dir) if path.is_relative() => DataSource::File(dir.join(path)),
            _ => DataSource::File(path),
        }
    } else {
        DataSource::Bundled
    };

    // Log file: env → config → default
    let log_file = env("SALADBOOK_LOG")
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = resolve_log_level(config.general.log_level.as_deref(), notes);

    ResolvedConfig {
        data,
        log_file,
        log_level,
    }
}

fn resolve_log_level(level: Option<&str>, notes: &mut Vec<ConfigNote>) -> LevelFilter {
    match level {
        None => DEFAULT_LOG_LEVEL,
        Some(s) => s.parse().unwrap_or_else(|_| {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Unknown log level '{}', using {}", s, DEFAULT_LOG_LEVEL),
            ));
            DEFAULT_LOG_LEVEL
        }),
    }
}
