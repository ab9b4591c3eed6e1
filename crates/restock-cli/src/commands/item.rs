//! Item management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use restock_core::{classify, PurchaseCadence, ShoppingList};

use crate::config::Config;
use crate::store::ItemStore;

#[derive(Subcommand)]
pub enum ItemAction {
    /// Add an item to the list
    Add {
        /// Item name
        name: String,
        /// How soon it will be needed: soon (7d), kind-of-soon (14d),
        /// not-soon (30d)
        #[arg(long)]
        when: Option<String>,
        /// Exact days until the next expected purchase (overrides --when)
        #[arg(long)]
        days: Option<i64>,
    },
    /// Record a purchase of an item
    Buy {
        /// Item id or name
        item: String,
    },
    /// Show one item with its current urgency
    Get {
        /// Item id or name
        item: String,
    },
    /// Remove an item from the list
    Remove {
        /// Item id or name
        item: String,
    },
}

pub fn run(action: ItemAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ItemStore::open()?;
    let mut list = store.load()?;

    match action {
        ItemAction::Add { name, when, days } => {
            let interval = match (days, when) {
                (Some(days), _) => days,
                (None, Some(when)) => PurchaseCadence::parse(&when)
                    .ok_or_else(|| format!("unknown cadence: {when}"))?
                    .days(),
                (None, None) => Config::load()?.items.cadence().days(),
            };
            let item = list.add(name, interval, Utc::now())?;
            store.save(&list)?;
            println!("Item added: {}", item.id);
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        ItemAction::Buy { item } => {
            let id = resolve_id(&list, &item)?;
            let updated = list.record_purchase(&id, Utc::now())?;
            store.save(&list)?;
            println!(
                "Purchase recorded: {} (total {})",
                updated.name, updated.total_purchases
            );
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        ItemAction::Get { item } => {
            let id = resolve_id(&list, &item)?;
            let record = list
                .get(&id)
                .ok_or_else(|| format!("No item matches '{item}'"))?;
            let classification = classify(record, Utc::now())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "item": record,
                    "score": classification.score,
                    "tier": classification.tier,
                }))?
            );
        }
        ItemAction::Remove { item } => {
            let id = resolve_id(&list, &item)?;
            let removed = list.remove(&id)?;
            store.save(&list)?;
            println!("Item removed: {}", removed.name);
        }
    }

    Ok(())
}

/// Resolve an id-or-name argument to an item id.
fn resolve_id(list: &ShoppingList, key: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(item) = list.get(key) {
        return Ok(item.id.clone());
    }
    if let Some(item) = list.find_by_name(key) {
        return Ok(item.id.clone());
    }
    Err(format!("No item matches '{key}'").into())
}
