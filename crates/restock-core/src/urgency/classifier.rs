//! Per-item urgency classification.
//!
//! Maps one item to an integer urgency score and exactly one of five
//! tiers. The score is the number of whole UTC calendar days until the
//! item's next expected purchase (negative once that date has passed),
//! except for dormant items, which are frozen at [`INACTIVE_SCORE`]:
//!
//! | score | tier |
//! |-------|------|
//! | < 0 | overdue |
//! | == 1000 | inactive |
//! | < 7 | soon |
//! | 7..30 | kindOfSoon |
//! | >= 30 | notSoon |
//!
//! Conditions are evaluated top to bottom, first match wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::whole_days_between;
use crate::error::UrgencyError;
use crate::item::Item;

/// Sentinel score for dormant items. Sorts after every live score.
pub const INACTIVE_SCORE: i64 = 1000;

/// Days without a purchase (or, for never-purchased items, since
/// creation) after which an item is considered dormant.
pub const DORMANCY_DAYS: i64 = 60;

/// Scores below this count as "soon" (days).
const SOON_WITHIN_DAYS: i64 = 7;

/// Scores from this value up count as "not soon" (days).
const NOT_SOON_FROM_DAYS: i64 = 30;

/// The five urgency tiers, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrgencyTier {
    Overdue,
    Soon,
    KindOfSoon,
    NotSoon,
    Inactive,
}

impl UrgencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Soon => "soon",
            Self::KindOfSoon => "kindOfSoon",
            Self::NotSoon => "notSoon",
            Self::Inactive => "inactive",
        }
    }

    /// All tiers, in display order.
    pub fn all() -> [UrgencyTier; 5] {
        [
            Self::Overdue,
            Self::Soon,
            Self::KindOfSoon,
            Self::NotSoon,
            Self::Inactive,
        ]
    }
}

/// Result of classifying one item at one reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Whole days until the next expected purchase, or [`INACTIVE_SCORE`]
    pub score: i64,
    /// The tier the score falls in
    pub tier: UrgencyTier,
}

/// Classify a single item against the reference instant `now`.
///
/// Deterministic: the same `(item, now)` always yields the same result,
/// and no state is carried between calls. `now` is injected rather than
/// read from a global clock.
///
/// # Errors
///
/// - [`UrgencyError::InvalidItem`] if a non-dormant record is missing
///   its next-purchase date. Never silently defaulted.
/// - [`UrgencyError::UnclassifiableItem`] if the score matches no tier
///   condition. Unreachable for any score this function computes; kept
///   so a boundary regression in score computation fails loudly.
pub fn classify(item: &Item, now: DateTime<Utc>) -> Result<Classification, UrgencyError> {
    let days_since_reference = whole_days_between(item.reference_date(), now);

    // An item nobody has touched in two months is not urgent, no matter
    // how stale its nominal next-purchase date is.
    let score = if days_since_reference >= DORMANCY_DAYS {
        INACTIVE_SCORE
    } else {
        let next = item
            .date_next_purchased
            .ok_or_else(|| UrgencyError::InvalidItem {
                name: item.name.clone(),
                reason: "missing dateNextPurchased".to_string(),
            })?;
        whole_days_between(now, next)
    };

    let tier = tier_for_score(score).ok_or_else(|| UrgencyError::UnclassifiableItem {
        name: item.name.clone(),
        score,
    })?;

    Ok(Classification { score, tier })
}

/// Tier for a score; `None` when no condition matches.
fn tier_for_score(score: i64) -> Option<UrgencyTier> {
    if score < 0 {
        Some(UrgencyTier::Overdue)
    } else if score == INACTIVE_SCORE {
        Some(UrgencyTier::Inactive)
    } else if score < SOON_WITHIN_DAYS {
        Some(UrgencyTier::Soon)
    } else if score < NOT_SOON_FROM_DAYS {
        Some(UrgencyTier::KindOfSoon)
    } else if score >= NOT_SOON_FROM_DAYS {
        Some(UrgencyTier::NotSoon)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::add_days;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    /// Item last purchased `days_ago` days before `now`, next purchase
    /// expected `days_ahead` days after `now`.
    fn make_item(name: &str, now: DateTime<Utc>, days_ago: i64, days_ahead: i64) -> Item {
        Item::new(name, name, add_days(now, -90), add_days(now, days_ahead))
            .with_last_purchased(add_days(now, -days_ago))
            .with_total_purchases(1)
    }

    #[test]
    fn test_tier_boundaries_exact() {
        assert_eq!(tier_for_score(-1), Some(UrgencyTier::Overdue));
        assert_eq!(tier_for_score(0), Some(UrgencyTier::Soon));
        assert_eq!(tier_for_score(6), Some(UrgencyTier::Soon));
        assert_eq!(tier_for_score(7), Some(UrgencyTier::KindOfSoon));
        assert_eq!(tier_for_score(29), Some(UrgencyTier::KindOfSoon));
        assert_eq!(tier_for_score(30), Some(UrgencyTier::NotSoon));
        assert_eq!(tier_for_score(999), Some(UrgencyTier::NotSoon));
        assert_eq!(tier_for_score(INACTIVE_SCORE), Some(UrgencyTier::Inactive));
    }

    #[test]
    fn test_classify_counts_days_to_next_purchase() {
        let now = utc(2024, 6, 1);
        let item = make_item("milk", now, 2, 9);
        let c = classify(&item, now).unwrap();
        assert_eq!(c.score, 9);
        assert_eq!(c.tier, UrgencyTier::KindOfSoon);
    }

    #[test]
    fn test_classify_overdue_negative_score() {
        let now = utc(2024, 6, 1);
        let item = make_item("eggs", now, 10, -4);
        let c = classify(&item, now).unwrap();
        assert_eq!(c.score, -4);
        assert_eq!(c.tier, UrgencyTier::Overdue);
    }

    #[test]
    fn test_dormancy_overrides_next_purchase_date() {
        let now = utc(2024, 6, 1);
        // Last purchased 61 days ago with a long-passed next date: the
        // stale date must not make the item look urgent.
        let item = make_item("saffron", now, 61, -30);
        let c = classify(&item, now).unwrap();
        assert_eq!(c.score, INACTIVE_SCORE);
        assert_eq!(c.tier, UrgencyTier::Inactive);
    }

    #[test]
    fn test_dormancy_boundary() {
        let now = utc(2024, 6, 1);
        // 59 days since reference: still live
        let live = classify(&make_item("a", now, 59, 3), now).unwrap();
        assert_eq!(live.tier, UrgencyTier::Soon);
        // 60 days: dormant
        let dormant = classify(&make_item("b", now, 60, 3), now).unwrap();
        assert_eq!(dormant.tier, UrgencyTier::Inactive);
        assert_eq!(dormant.score, INACTIVE_SCORE);
    }

    #[test]
    fn test_never_purchased_anchors_to_creation_date() {
        let now = utc(2024, 6, 1);
        // Created 92 days ago, never purchased: dormant regardless of
        // the (missing) next-purchase date.
        let mut item = Item::new("b", "beans", utc(2024, 3, 1), now);
        item.date_next_purchased = None;
        let c = classify(&item, now).unwrap();
        assert_eq!(c.score, INACTIVE_SCORE);
        assert_eq!(c.tier, UrgencyTier::Inactive);
    }

    #[test]
    fn test_missing_next_purchase_fails_fast() {
        let now = utc(2024, 6, 1);
        let mut item = make_item("broken", now, 2, 5);
        item.date_next_purchased = None;
        let err = classify(&item, now).unwrap_err();
        assert!(matches!(err, UrgencyError::InvalidItem { .. }));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let now = utc(2024, 6, 1);
        let item = make_item("rice", now, 5, 12);
        let first = classify(&item, now).unwrap();
        let second = classify(&item, now).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tier_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&UrgencyTier::KindOfSoon).unwrap(),
            "\"kindOfSoon\""
        );
        assert_eq!(UrgencyTier::NotSoon.as_str(), "notSoon");
    }
}
