//! TOML-based configuration for keyfwd.
//!
//! The config file is optional.  Its default location is:
//! - Linux:   `$XDG_CONFIG_HOME/keyfwd/config.toml` or `~/.config/keyfwd/config.toml`
//! - macOS:   `~/Library/Application Support/keyfwd/config.toml`
//! - Windows: `%APPDATA%\keyfwd\config.toml`
//!
//! ```toml
//! [serial]
//! port = "/dev/ttyUSB0"
//!
//! [input]
//! device = "/dev/input/event3"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field has a default, so an empty file (or no file) is valid.  The
//! serial line parameters and the key table are not configurable.
//!
//! Command-line flags override values read from the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::infrastructure::serial::DEFAULT_PORT;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub serial: SerialConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Serial device selection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SerialConfig {
    /// Device path of the ESP32's USB-serial adapter.
    #[serde(default = "default_port")]
    pub port: String,
}

/// Keyboard device selection.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// evdev node to read.  Auto-detected when absent.
    #[serde(default)]
    pub device: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Resolves the full path of the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Parses `AppConfig` from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or has unknown keys.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads `AppConfig` from `path`.
///
/// A missing file yields `AppConfig::default()` only when `required` is
/// `false`; a file named explicitly on the command line must exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            Ok(AppConfig::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads the config from `explicit` if given, otherwise from the default
/// location (missing file means defaults).
///
/// # Errors
///
/// See [`load_config_from`].  An undeterminable default location is not an
/// error; defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_from(path, true),
        None => match config_file_path() {
            Ok(path) => load_config_from(&path, false),
            Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
            Err(e) => Err(e),
        },
    }
}

/// Resolves the platform config directory, including the `keyfwd` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("keyfwd"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("keyfwd")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("keyfwd"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
