//! Configuration system for the `locale-kit` CLI.
//!
//! The configuration follows XDG Base Directory Specification and supports:
//! - User config: `~/.config/locale-kit/config.yaml`
//! - Project config: `.locale-kit.yaml` in current directory
//! - Environment variables: `LOCALE_KIT_*`
//! - Command-line flags (highest precedence)
//!
//! Library users build [`Settings`] directly; [`Config`] only exists to feed
//! the binary.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
pub use settings::{DEFAULT_LOCALES_FOLDER, DEFAULT_NOT_FOUND_SYMBOL, Settings};

use crate::error::{Error, Result};

/// Project config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".locale-kit.yaml";

/// Environment variable overriding the locales folder.
pub const ENV_DIR: &str = "LOCALE_KIT_DIR";
/// Environment variable overriding the fallback locale.
pub const ENV_FALLBACK: &str = "LOCALE_KIT_FALLBACK";
/// Environment variable overriding the not-found symbol.
pub const ENV_SYMBOL: &str = "LOCALE_KIT_SYMBOL";

/// Main CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Folder holding `<locale><ext>` files.
    #[serde(default)]
    pub locales_dir: Option<PathBuf>,

    /// Locale used when the host culture matches nothing.
    #[serde(default)]
    pub fallback_locale: Option<String>,

    /// Wrapper for untranslated keys.
    #[serde(default)]
    pub not_found_symbol: Option<String>,

    /// Fail on missing keys instead of wrapping them.
    #[serde(default)]
    pub throw_when_key_not_found: Option<bool>,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format (table, json, yaml).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: default_format() }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.locale-kit.yaml`)
    /// 4. User config (`~/.config/locale-kit/config.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            config.merge(Self::load_from_file(&path)?);
        }

        let project_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            config.merge(Self::load_from_file(&project_path)?);
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.locales_dir.is_some() {
            self.locales_dir = other.locales_dir;
        }
        if other.fallback_locale.is_some() {
            self.fallback_locale = other.fallback_locale;
        }
        if other.not_found_symbol.is_some() {
            self.not_found_symbol = other.not_found_symbol;
        }
        if other.throw_when_key_not_found.is_some() {
            self.throw_when_key_not_found = other.throw_when_key_not_found;
        }
        if other.output.format != default_format() {
            self.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(dir) = lookup(ENV_DIR) {
            self.locales_dir = Some(PathBuf::from(dir));
        }
        if let Some(fallback) = lookup(ENV_FALLBACK) {
            self.fallback_locale = Some(fallback);
        }
        if let Some(symbol) = lookup(ENV_SYMBOL) {
            self.not_found_symbol = Some(symbol);
        }
    }

    /// Get the path to the user config file.
    ///
    /// Follows XDG Base Directory Specification:
    /// - Uses `XDG_CONFIG_HOME/locale-kit/config.yaml` if set
    /// - Falls back to `~/.config/locale-kit/config.yaml`
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/locale-kit`
    /// - Linux/macOS: Falls back to `~/.config/locale-kit` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\locale-kit`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("locale-kit"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("locale-kit"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("locale-kit"))
        }
    }

    /// Build engine settings from this configuration.
    ///
    /// Unset values keep the [`Settings`] defaults; the host culture is
    /// left to detection.
    #[must_use]
    pub fn to_settings(&self) -> Settings {
        Settings::builder()
            .maybe_not_found_symbol(self.not_found_symbol.clone())
            .maybe_throw_when_key_not_found(self.throw_when_key_not_found)
            .maybe_fallback_locale(self.fallback_locale.clone())
            .maybe_locales_folder(self.locales_dir.clone())
            .build()
    }
}
