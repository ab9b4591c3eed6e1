//! Purchase-interval estimation.
//!
//! When an item is created the user picks a rough cadence; every
//! recorded purchase afterwards refines the estimate by blending the
//! previous interval with the interval actually observed.

use serde::{Deserialize, Serialize};

/// Interval used when no cadence was chosen at creation (days).
pub const DEFAULT_INTERVAL_DAYS: i64 = 14;

/// Rough cadence chosen when an item is added to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseCadence {
    /// Needed again within the week
    Soon,
    /// Needed again within a couple of weeks
    KindOfSoon,
    /// Needed again within the month
    NotSoon,
}

impl PurchaseCadence {
    /// Days until the first expected purchase for this cadence.
    pub fn days(&self) -> i64 {
        match self {
            Self::Soon => 7,
            Self::KindOfSoon => 14,
            Self::NotSoon => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soon => "soon",
            Self::KindOfSoon => "kindOfSoon",
            Self::NotSoon => "notSoon",
        }
    }

    /// Parse a user-supplied cadence string.
    ///
    /// Accepts both the wire spelling (`kindOfSoon`) and the
    /// CLI spelling (`kind-of-soon`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "soon" => Some(Self::Soon),
            "kindOfSoon" | "kind-of-soon" => Some(Self::KindOfSoon),
            "notSoon" | "not-soon" => Some(Self::NotSoon),
            _ => None,
        }
    }
}

impl Default for PurchaseCadence {
    fn default() -> Self {
        Self::KindOfSoon
    }
}

/// Estimate the next purchase interval in days.
///
/// `total_purchases` is the counter *after* the purchase being recorded.
/// The previous estimate is weighted by the purchase history and the
/// just-observed interval by one latest observation:
///
/// ```text
/// next = round((previous * previous_factor + observed) / (previous_factor + 1))
/// ```
///
/// where `previous_factor` is `total_purchases - 1` once there is real
/// history, and `1` for the first purchase (so the creation cadence and
/// the first observation average evenly). The result is clamped to at
/// least one day.
pub fn next_interval(
    previous_interval: i64,
    days_since_last_purchase: i64,
    total_purchases: u32,
) -> i64 {
    let previous_factor = if total_purchases > 1 {
        (total_purchases - 1) as f64
    } else {
        1.0
    };
    let divisor = previous_factor + 1.0;
    let estimate =
        (previous_interval as f64 * previous_factor + days_since_last_purchase as f64) / divisor;
    (estimate.round() as i64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_purchase_averages_with_cadence() {
        // Cadence said 14 days, actually bought after 10: meet in the middle
        assert_eq!(next_interval(14, 10, 1), 12);
    }

    #[test]
    fn test_history_outweighs_one_observation() {
        // Nine purchases of history at 7 days, one outlier at 30
        let estimate = next_interval(7, 30, 10);
        assert!(estimate < 12, "one outlier should barely move the estimate, got {estimate}");
        assert!(estimate > 7);
    }

    #[test]
    fn test_stable_interval_stays_put() {
        assert_eq!(next_interval(7, 7, 5), 7);
    }

    #[test]
    fn test_same_day_repurchase_clamps_to_one_day() {
        assert_eq!(next_interval(1, 0, 2), 1);
        assert_eq!(next_interval(1, 0, 1), 1);
    }

    #[test]
    fn test_cadence_days() {
        assert_eq!(PurchaseCadence::Soon.days(), 7);
        assert_eq!(PurchaseCadence::KindOfSoon.days(), 14);
        assert_eq!(PurchaseCadence::NotSoon.days(), 30);
        assert_eq!(PurchaseCadence::default().days(), DEFAULT_INTERVAL_DAYS);
    }

    #[test]
    fn test_cadence_parse_both_spellings() {
        assert_eq!(PurchaseCadence::parse("soon"), Some(PurchaseCadence::Soon));
        assert_eq!(
            PurchaseCadence::parse("kind-of-soon"),
            Some(PurchaseCadence::KindOfSoon)
        );
        assert_eq!(
            PurchaseCadence::parse("kindOfSoon"),
            Some(PurchaseCadence::KindOfSoon)
        );
        assert_eq!(
            PurchaseCadence::parse("notSoon"),
            Some(PurchaseCadence::NotSoon)
        );
        assert_eq!(PurchaseCadence::parse("eventually"), None);
    }
}
