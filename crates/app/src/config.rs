//! App configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use storefront_observability::LogSettings;

use crate::seed::SeedData;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Navigation state opened when a session starts (e.g. `"Inventory"`).
    pub start_view: String,
    /// Show the login screen until a user signs in.
    pub require_login: bool,
    /// Only the `admin` principal may create products.
    pub admin_only_create: bool,
    pub logging: LogSettings,
    pub seed: SeedData,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_view: String::new(),
            require_login: false,
            admin_only_create: false,
            logging: LogSettings::default(),
            seed: SeedData::default(),
        }
    }
}

/// Where the active config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl AppConfig {
    /// Load the file named by `STOREFRONT_CONFIG`, or fall back to the
    /// built-in defaults when the variable is unset.
    pub fn load() -> anyhow::Result<(Self, ConfigSource)> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = Self::load_from(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            None => Ok((Self::default(), ConfigSource::BuiltIn)),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse config JSON")
    }
}
