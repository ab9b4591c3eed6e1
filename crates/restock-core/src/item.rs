//! Shopping-list item records.
//!
//! Items are owned by the external item store; the core receives a
//! read-only view and hands updated records back. Field names serialize
//! camelCase to match the store's documents, timestamps are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single item on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque identifier assigned at creation
    pub id: String,
    /// User-visible name; uniqueness is not enforced by the core
    pub name: String,
    /// Set once at creation, immutable afterwards
    pub date_created: DateTime<Utc>,
    /// Absent until the item is purchased for the first time
    #[serde(default)]
    pub date_last_purchased: Option<DateTime<Utc>>,
    /// Always present in well-formed records; optional here so a record
    /// missing the field is rejected by the classifier instead of being
    /// silently defaulted
    #[serde(default)]
    pub date_next_purchased: Option<DateTime<Utc>>,
    /// How many times the item has been purchased
    #[serde(default)]
    pub total_purchases: u32,
}

impl Item {
    /// Create a new, never-purchased item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date_created: DateTime<Utc>,
        date_next_purchased: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_created,
            date_last_purchased: None,
            date_next_purchased: Some(date_next_purchased),
            total_purchases: 0,
        }
    }

    /// The date urgency arithmetic is anchored to: the last purchase
    /// date if the item has been purchased, else the creation date.
    pub fn reference_date(&self) -> DateTime<Utc> {
        self.date_last_purchased.unwrap_or(self.date_created)
    }

    /// Set the last-purchase date
    pub fn with_last_purchased(mut self, date: DateTime<Utc>) -> Self {
        self.date_last_purchased = Some(date);
        self
    }

    /// Set the purchase counter
    pub fn with_total_purchases(mut self, total: u32) -> Self {
        self.total_purchases = total;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_reference_date_prefers_last_purchase() {
        let created = utc(2024, 3, 1);
        let item = Item::new("1", "milk", created, utc(2024, 3, 8));
        assert_eq!(item.reference_date(), created);

        let purchased = item.with_last_purchased(utc(2024, 5, 30));
        assert_eq!(purchased.reference_date(), utc(2024, 5, 30));
    }

    #[test]
    fn test_serde_camel_case_round_trip() {
        let item = Item::new("abc", "bread", utc(2024, 3, 1), utc(2024, 3, 15))
            .with_last_purchased(utc(2024, 3, 10))
            .with_total_purchases(2);

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("dateCreated"));
        assert!(json.contains("dateLastPurchased"));
        assert!(json.contains("dateNextPurchased"));
        assert!(json.contains("totalPurchases"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_deserialize_record_with_missing_fields() {
        // A record fresh from the store may omit optional fields entirely
        let json = r#"{
            "id": "x",
            "name": "coffee",
            "dateCreated": "2024-03-01T12:00:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.date_last_purchased, None);
        assert_eq!(item.date_next_purchased, None);
        assert_eq!(item.total_purchases, 0);
    }
}
