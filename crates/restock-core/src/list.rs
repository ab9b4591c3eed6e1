//! In-memory shopping-list operations.
//!
//! The external store owns persistence; this type operates on a snapshot
//! of its records and produces the updated records to hand back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::{add_days, whole_days_between};
use crate::error::ListError;
use crate::estimate::{next_interval, DEFAULT_INTERVAL_DAYS};
use crate::item::Item;

/// A snapshot of the shopping list and the operations over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing collection of records.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Add a new item expected to be needed again in `interval_days`.
    ///
    /// The item gets a fresh id, `date_created = now`, and
    /// `date_next_purchased = now + interval_days` (at least one day).
    ///
    /// # Errors
    /// [`ListError::EmptyName`] if `name` is empty or whitespace.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        interval_days: i64,
        now: DateTime<Utc>,
    ) -> Result<Item, ListError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ListError::EmptyName);
        }

        let item = Item::new(
            Uuid::new_v4().to_string(),
            name,
            now,
            add_days(now, interval_days.max(1)),
        );
        self.items.push(item.clone());
        Ok(item)
    }

    /// Record a purchase of the item with id `id` at instant `now`.
    ///
    /// Sets the last-purchase date, bumps the counter, and re-derives
    /// the next-purchase date from the previous interval and the
    /// interval actually observed.
    ///
    /// # Errors
    /// [`ListError::ItemNotFound`] if no item has the given id.
    pub fn record_purchase(&mut self, id: &str, now: DateTime<Utc>) -> Result<Item, ListError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ListError::ItemNotFound { id: id.to_string() })?;

        let reference = item.reference_date();
        let previous_interval = item
            .date_next_purchased
            .map(|next| whole_days_between(reference, next))
            .unwrap_or(DEFAULT_INTERVAL_DAYS)
            .max(1);
        let observed = whole_days_between(reference, now).max(0);

        item.total_purchases += 1;
        item.date_last_purchased = Some(now);
        let interval = next_interval(previous_interval, observed, item.total_purchases);
        item.date_next_purchased = Some(add_days(now, interval));

        Ok(item.clone())
    }

    /// Remove the item with id `id`, returning the removed record.
    ///
    /// # Errors
    /// [`ListError::ItemNotFound`] if no item has the given id.
    pub fn remove(&mut self, id: &str) -> Result<Item, ListError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ListError::ItemNotFound { id: id.to_string() })?;
        Ok(self.items.remove(index))
    }

    /// Item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First item whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// All records, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Consume the list, yielding the records.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
