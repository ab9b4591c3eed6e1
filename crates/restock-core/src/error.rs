//! Core error types for restock-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use thiserror::Error;

/// Core error type for restock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Urgency classification errors
    #[error("Urgency error: {0}")]
    Urgency(#[from] UrgencyError),

    /// List operation errors
    #[error("List error: {0}")]
    List(#[from] ListError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Urgency classification errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrgencyError {
    /// The computed score matched none of the tier conditions.
    ///
    /// Should be unreachable for any score the classifier can produce;
    /// raised defensively so a regression in score computation surfaces
    /// as a data-integrity bug instead of a misplaced item.
    #[error("Item '{name}' is unclassifiable: score {score} matches no urgency tier")]
    UnclassifiableItem { name: String, score: i64 },

    /// The record is missing or carries malformed purchase data.
    ///
    /// Fails fast: a silently defaulted next-purchase date would misrank
    /// the item without any visible symptom.
    #[error("Invalid item '{name}': {reason}")]
    InvalidItem { name: String, reason: String },
}

/// List operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// No item with the given id exists on the list
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    /// Item names must be non-empty
    #[error("Item name must not be empty")]
    EmptyName,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
