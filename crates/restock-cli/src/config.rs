//! TOML-based CLI configuration.
//!
//! Stores display and item defaults:
//! - Default cadence used by `item add` when neither --when nor --days
//!   is given
//! - Whether `list` shows inactive items
//!
//! Configuration is stored at `~/.config/restock/config.toml`.

use std::fs;
use std::path::PathBuf;

use restock_core::PurchaseCadence;
use serde::{Deserialize, Serialize};

use crate::store::data_dir;

/// Item-related defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsConfig {
    /// Cadence for new items: "soon", "kindOfSoon" or "notSoon"
    #[serde(default = "default_cadence")]
    pub default_cadence: String,
    /// Whether `list` includes inactive items
    #[serde(default = "default_true")]
    pub show_inactive: bool,
}

impl ItemsConfig {
    /// The configured cadence, falling back to the default when the
    /// stored string is not a known cadence.
    pub fn cadence(&self) -> PurchaseCadence {
        PurchaseCadence::parse(&self.default_cadence).unwrap_or_default()
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            default_cadence: default_cadence(),
            show_inactive: default_true(),
        }
    }
}

/// CLI configuration.
///
/// Serialized to/from TOML at `~/.config/restock/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub items: ItemsConfig,
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration; a missing file yields the defaults.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(toml::from_str(&data)?)
    }

    /// Persist the configuration.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

fn default_cadence() -> String {
    PurchaseCadence::KindOfSoon.as_str().to_string()
}

fn default_true() -> bool {
    true
}
