// Configuration management for tunedeck
// Optional TOML file, read-only - defaults cover everything when it's missing

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Where the daily log files go. No directory, no log files.
    pub directory: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` isn't set
    pub filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Print a one-line banner before the first menu
    pub show_banner: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filter: "info,tunedeck=debug".to_string(),
        }
    }
}

impl Config {
    /// Load from `explicit` (must exist) or the default location (used if present).
    /// Never writes anything back.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// `<config dir>/tunedeck/config.toml`, if the platform has a config dir
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("tunedeck").join("config.toml"))
    }
}
