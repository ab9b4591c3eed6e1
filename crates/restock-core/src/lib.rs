//! # Restock Core Library
//!
//! This library provides the core business logic for Restock, a household
//! shopping-list manager. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any frontend
//! being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Urgency Engine**: Classifies every item on the list into one of five
//!   urgency tiers and produces a total display ordering, most urgent first
//! - **Item Records**: The record shape exchanged with the external item
//!   store (serialized camelCase, RFC 3339 UTC timestamps)
//! - **List Operations**: In-memory add / record-purchase / remove over a
//!   caller-provided snapshot of the collection
//!
//! The core is pure and synchronous: it performs no I/O, holds no locks,
//! and takes the reference instant as an argument rather than reading a
//! global clock.
//!
//! ## Key Components
//!
//! - [`classify`]: Per-item urgency score and tier
//! - [`UrgencyRanker`]: Classification pass and display ordering
//! - [`UrgencyBuckets`]: Per-pass partition of items by tier
//! - [`ShoppingList`]: Collection operations

pub mod dates;
pub mod error;
pub mod estimate;
pub mod item;
pub mod list;
pub mod urgency;

pub use dates::{add_days, whole_days_between};
pub use error::{CoreError, ListError, Result, UrgencyError};
pub use estimate::{next_interval, PurchaseCadence, DEFAULT_INTERVAL_DAYS};
pub use item::Item;
pub use list::ShoppingList;
pub use urgency::{
    classify, Classification, RankedItem, RankingOutcome, RejectedItem, TierCounts,
    UrgencyBuckets, UrgencyRanker, UrgencyTier, DORMANCY_DAYS, INACTIVE_SCORE,
};
