//! JSON-file item store.
//!
//! Stands in for the external document store: the CLI loads a snapshot
//! of the item records, runs core operations over it, and writes the
//! updated records back.

use std::fs;
use std::path::PathBuf;

use restock_core::{Item, ShoppingList};

/// Returns `~/.config/restock[-dev]/` based on RESTOCK_ENV.
///
/// Set RESTOCK_ENV=dev to use a development data directory, or
/// RESTOCK_DATA_DIR to point somewhere else entirely (tests use this).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(dir) = std::env::var("RESTOCK_DATA_DIR") {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RESTOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("restock-dev")
    } else {
        base_dir.join("restock")
    };

    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File-backed store for the item records.
pub struct ItemStore {
    path: PathBuf,
}

impl ItemStore {
    /// Open the store at the default location.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            path: data_dir()?.join("items.json"),
        })
    }

    /// Open a store backed by an explicit file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the current records; a store that does not exist yet is an
    /// empty list.
    pub fn load(&self) -> Result<ShoppingList, Box<dyn std::error::Error>> {
        if !self.path.exists() {
            return Ok(ShoppingList::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let items: Vec<Item> = serde_json::from_str(&data)?;
        Ok(ShoppingList::from_items(items))
    }

    /// Persist the records.
    pub fn save(&self, list: &ShoppingList) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(list.items())?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
