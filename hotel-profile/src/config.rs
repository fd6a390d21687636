//! Application configuration
//!
//! Values are layered: built-in defaults, then `config.toml` in the user's
//! config directory, then `HOTEL_PROFILE_*` environment variables (a `.env`
//! file is loaded by `main`), then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "hotel-profile";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "hotels.db";

pub const ENV_DATABASE_URL: &str = "HOTEL_PROFILE_DATABASE_URL";
pub const ENV_EXPORT_DIR: &str = "HOTEL_PROFILE_EXPORT_DIR";

/// Settings as written in `config.toml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    database_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    export_dir: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    /// Where export and template files are written
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            export_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    /// `<config dir>/hotel-profile`
    pub fn app_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(APP_DIR))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        let config = Self::load_from(&path)?.with_overrides(|key| std::env::var(key).ok());
        log::debug!("Using database {}", config.database_url);
        Ok(config)
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        if !path.exists() {
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(url) = file.database_url {
            config.database_url = url;
        }
        if let Some(dir) = file.export_dir {
            config.export_dir = dir;
        }

        Ok(config)
    }

    /// Write the current values as a config file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let file = ConfigFile {
            database_url: Some(self.database_url.clone()),
            export_dir: Some(self.export_dir.clone()),
        };
        let content = toml::to_string_pretty(&file).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Apply `HOTEL_PROFILE_*` values from `lookup`; empty values are ignored
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank(ENV_DATABASE_URL) {
            self.database_url = url;
        }
        if let Some(dir) = non_blank(ENV_EXPORT_DIR) {
            self.export_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database_url = url;
        }
        self
    }
}

fn default_database_url() -> String {
    match Config::app_dir() {
        Ok(dir) => format!("sqlite://{}?mode=rwc", dir.join(DATABASE_FILE).display()),
        Err(_) => format!("sqlite://{}?mode=rwc", DATABASE_FILE),
    }
}

/// Make sure the directory holding a `sqlite://` database file exists
pub fn ensure_database_dir(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file = rest.split('?').next().unwrap_or(rest);
    if file.is_empty() || file == ":memory:" {
        return Ok(());
    }

    if let Some(parent) = Path::new(file).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
    }
    Ok(())
}
