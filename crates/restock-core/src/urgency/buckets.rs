//! Per-pass partition of the list into urgency tiers.
//!
//! A bucket structure belongs to the classification pass that built it:
//! each pass starts from an empty value and the result is exposed
//! read-only, so membership can never leak across passes.

use serde::Serialize;

use super::classifier::UrgencyTier;

/// Item ids partitioned by urgency tier for one classification pass.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyBuckets {
    overdue: Vec<String>,
    soon: Vec<String>,
    kind_of_soon: Vec<String>,
    not_soon: Vec<String>,
    inactive: Vec<String>,
}

/// Number of items per tier, e.g. for an "N overdue" badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    pub overdue: usize,
    pub soon: usize,
    pub kind_of_soon: usize,
    pub not_soon: usize,
    pub inactive: usize,
}

impl UrgencyBuckets {
    /// Create an empty partition for a new pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an item id under its tier.
    pub fn insert(&mut self, tier: UrgencyTier, id: impl Into<String>) {
        self.bucket_mut(tier).push(id.into());
    }

    /// Ids recorded under one tier, in insertion order.
    pub fn tier(&self, tier: UrgencyTier) -> &[String] {
        match tier {
            UrgencyTier::Overdue => &self.overdue,
            UrgencyTier::Soon => &self.soon,
            UrgencyTier::KindOfSoon => &self.kind_of_soon,
            UrgencyTier::NotSoon => &self.not_soon,
            UrgencyTier::Inactive => &self.inactive,
        }
    }

    /// Which tier an id was recorded under, if any.
    pub fn tier_of(&self, id: &str) -> Option<UrgencyTier> {
        UrgencyTier::all()
            .into_iter()
            .find(|tier| self.tier(*tier).iter().any(|i| i == id))
    }

    /// Per-tier counts.
    pub fn counts(&self) -> TierCounts {
        TierCounts {
            overdue: self.overdue.len(),
            soon: self.soon.len(),
            kind_of_soon: self.kind_of_soon.len(),
            not_soon: self.not_soon.len(),
            inactive: self.inactive.len(),
        }
    }

    /// Total items across all tiers.
    pub fn total(&self) -> usize {
        UrgencyTier::all()
            .into_iter()
            .map(|tier| self.tier(tier).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn bucket_mut(&mut self, tier: UrgencyTier) -> &mut Vec<String> {
        match tier {
            UrgencyTier::Overdue => &mut self.overdue,
            UrgencyTier::Soon => &mut self.soon,
            UrgencyTier::KindOfSoon => &mut self.kind_of_soon,
            UrgencyTier::NotSoon => &mut self.not_soon,
            UrgencyTier::Inactive => &mut self.inactive,
        }
    }
}
