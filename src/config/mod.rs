// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme and language (the persisted user settings)
//! - `[backend]` - Conversion service URL and request timeout
//! - `[converter]` - Initial pair, amount and rate ladder multipliers
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `SKYVENTOR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use skyventor::config;
//! use skyventor::domain::settings::ThemeMode;
//!
//! // Load existing configuration (returns tuple with optional warning key)
//! let (mut config, _warning) = config::load();
//!
//! config.general.theme = ThemeMode::Light;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::currency::CurrencyCode;
use crate::domain::settings::Settings;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when the file exists but cannot be read.
pub const LOAD_WARNING_KEY: &str = "error.config";

// =============================================================================
// Section Structs
// =============================================================================

/// Conversion service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL, without trailing slash.
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Timeout for every request (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Converter screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConverterConfig {
    #[serde(default = "default_from")]
    pub default_from: CurrencyCode,

    #[serde(default = "default_to")]
    pub default_to: CurrencyCode,

    #[serde(default = "default_amount")]
    pub default_amount: String,

    /// Rate ladder multipliers, in display order.
    #[serde(default = "default_ladder_multipliers")]
    pub ladder_multipliers: Vec<u32>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_from: default_from(),
            default_to: default_to(),
            default_amount: default_amount(),
            ladder_multipliers: default_ladder_multipliers(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Persisted user settings.
    #[serde(default)]
    pub general: Settings,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub converter: ConverterConfig,
}

impl Config {
    /// Brings out-of-range values back into bounds.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.backend.timeout_secs = self
            .backend
            .timeout_secs
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        self.backend.url = self.backend.url.trim().trim_end_matches('/').to_string();
        if self.backend.url.is_empty() {
            self.backend.url = default_backend_url();
        }

        self.converter.ladder_multipliers.retain(|&m| m > 0);
        if self.converter.ladder_multipliers.is_empty() {
            self.converter.ladder_multipliers = default_ladder_multipliers();
        }
        self.converter.default_from = CurrencyCode::new(self.converter.default_from.as_str());
        self.converter.default_to = CurrencyCode::new(self.converter.default_to.as_str());
        if self.converter.default_from.is_empty() {
            self.converter.default_from = default_from();
        }
        if self.converter.default_to.is_empty() {
            self.converter.default_to = default_to();
        }
        self
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_from() -> CurrencyCode {
    CurrencyCode::new(DEFAULT_FROM_CODE)
}

fn default_to() -> CurrencyCode {
    CurrencyCode::new(DEFAULT_TO_CODE)
}

fn default_amount() -> String {
    DEFAULT_AMOUNT.to_string()
}

fn default_ladder_multipliers() -> Vec<u32> {
    DEFAULT_LADDER_MULTIPLIERS.to_vec()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
#[must_use]
pub fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_file_path(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings file ignored");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config.sanitized())
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_file_path(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Replaces the `[general]` section of the file at `path`, keeping the
/// other sections as they are.
///
/// A missing file is created. A file that cannot be parsed is left untouched
/// and its error is returned, so hand edits are never silently discarded.
pub fn save_settings_to_path(settings: Settings, path: &Path) -> Result<()> {
    let mut config = if path.exists() {
        load_from_path(path)?
    } else {
        Config::default()
    };
    config.general = settings;
    save_to_path(&config, path)
}

/// Reads only the `[general]` section of the file at `path`.
///
/// A missing file yields the default settings.
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_from_path(path).map(|config| config.general)
}

// =============================================================================
// Tests
// =============================================================================
