// Configuration loading and parsing (config/lotto.toml).
//
// The file is optional. Without it the three built-in games are available
// and draws use the default attempt multiplier.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draw::{Drawer, DEFAULT_ATTEMPTS_PER_NUMBER};
use crate::preset::{PresetError, PresetRegistry};

/// File name looked up inside the `config/` directory.
pub const CONFIG_FILE: &str = "lotto.toml";

/// Default `tracing` filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub draw: DrawSettings,
    pub logging: LoggingConfig,
    /// Built-in presets plus any `[[presets]]` from the file.
    pub presets: PresetRegistry,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            draw: DrawSettings::default(),
            logging: LoggingConfig::default(),
            presets: PresetRegistry::builtin(),
        }
    }
}

impl Config {
    /// A drawer honoring `[draw] attempts_per_number`.
    pub fn drawer(&self) -> Drawer {
        Drawer::with_attempts_per_number(self.draw.attempts_per_number)
    }
}

// ---------------------------------------------------------------------------
// lotto.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire lotto.toml file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    draw: DrawSettings,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    presets: Vec<PresetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Samples allowed per requested number before a draw fails.
    pub attempts_per_number: u32,
}

impl Default for DrawSettings {
    fn default() -> Self {
        DrawSettings {
            attempts_per_number: DEFAULT_ATTEMPTS_PER_NUMBER,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// One `[[presets]]` table.
#[derive(Debug, Clone, Deserialize)]
struct PresetEntry {
    name: String,
    label: String,
    count: i64,
    minimum: i64,
    maximum: i64,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load `config/lotto.toml` relative to `base_dir`, falling back to defaults
/// when the file does not exist.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = read_file(&path)?;
    parse_config(&text, &path)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_from(&cwd)
}

/// Parse and validate config text. `path` is only used in error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    assemble(file)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn assemble(file: ConfigFile) -> Result<Config, ConfigError> {
    if file.draw.attempts_per_number == 0 {
        return Err(ConfigError::ValidationError {
            field: "draw.attempts_per_number".into(),
            message: "must be greater than 0".into(),
        });
    }

    if file.logging.filter.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.filter".into(),
            message: "must not be empty".into(),
        });
    }

    let mut presets = PresetRegistry::builtin();
    for (i, entry) in file.presets.iter().enumerate() {
        presets
            .add(
                &entry.name,
                &entry.label,
                entry.count,
                entry.minimum,
                entry.maximum,
            )
            .map_err(|e| ConfigError::ValidationError {
                field: format!("presets[{i}]"),
                message: match e {
                    PresetError::Invalid { source, .. } => source.to_string(),
                    other => other.to_string(),
                },
            })?;
    }

    Ok(Config {
        draw: file.draw,
        logging: file.logging,
        presets,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
