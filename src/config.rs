use crate::profile::Profile;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "estate-scout.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub state: StateConfig,
    pub profile: Profile,
    pub logging: LoggingConfig,
    /// File this config was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// `builtin`, a path to a JSON file, or an http(s) URL.
    pub source: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: "builtin".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct StateConfig {
    /// Where favorites, viewed listings and sent inquiries are kept.
    pub path: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".estate-scout/state.json"),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse config")
    }

    /// Load from an explicit path, or from the default file if present.
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config =
            Self::parse(&raw).with_context(|| format!("Invalid config file {}", path.display()))?;
        config.source = Some(path);
        Ok(config)
    }
}
