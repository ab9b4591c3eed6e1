//! Total ordering of the list for display, most urgent first.
//!
//! Items order by ascending urgency score, so overdue items (negative
//! scores) lead and dormant items (sentinel score) trail; equal scores
//! tie-break by name, ascending and case-sensitive.
//!
//! A ranking pass classifies every item exactly once and sorts on the
//! precomputed scores. The pairwise [`UrgencyRanker::compare`] is the
//! same order computed from scratch for two items.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::buckets::UrgencyBuckets;
use super::classifier::{classify, UrgencyTier};
use crate::error::UrgencyError;
use crate::item::Item;

/// An item together with its classification for one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedItem {
    #[serde(flatten)]
    pub item: Item,
    pub score: i64,
    pub tier: UrgencyTier,
}

/// An item a pass could not classify, reported instead of aborting the
/// rest of the collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedItem {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: UrgencyError,
}

fn serialize_error<S: serde::Serializer>(
    error: &UrgencyError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Owned result of one classification pass over a collection snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOutcome {
    /// Items in display order, most urgent first
    pub ranked: Vec<RankedItem>,
    /// Fresh tier partition of the classified items
    pub buckets: UrgencyBuckets,
    /// Items skipped because classification failed
    pub rejected: Vec<RejectedItem>,
}

/// Ranks a collection snapshot against one reference instant.
pub struct UrgencyRanker {
    now: DateTime<Utc>,
}

impl UrgencyRanker {
    /// Create a ranker for the given reference instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Order two items for display.
    ///
    /// Classifies both items from scratch; use [`rank`](Self::rank) for
    /// whole collections so each item is classified only once.
    ///
    /// # Errors
    /// Propagates the classification failure of either item.
    pub fn compare(&self, a: &Item, b: &Item) -> Result<Ordering, UrgencyError> {
        let score_a = classify(a, self.now)?.score;
        let score_b = classify(b, self.now)?.score;
        Ok(score_a.cmp(&score_b).then_with(|| a.name.cmp(&b.name)))
    }

    /// Run one classification pass over a snapshot of the collection.
    ///
    /// Each item is classified exactly once; items that fail to classify
    /// are reported in [`RankingOutcome::rejected`] without aborting the
    /// rest. The sort is stable, so repeated passes over the same
    /// snapshot yield the same sequence.
    pub fn rank(&self, items: &[Item]) -> RankingOutcome {
        let mut ranked = Vec::with_capacity(items.len());
        let mut buckets = UrgencyBuckets::new();
        let mut rejected = Vec::new();

        for item in items {
            match classify(item, self.now) {
                Ok(classification) => {
                    buckets.insert(classification.tier, item.id.clone());
                    ranked.push(RankedItem {
                        item: item.clone(),
                        score: classification.score,
                        tier: classification.tier,
                    });
                }
                Err(error) => rejected.push(RejectedItem {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    error,
                }),
            }
        }

        ranked.sort_by(|a, b| {
            a.score
                .cmp(&b.score)
                .then_with(|| a.item.name.cmp(&b.item.name))
        });

        RankingOutcome {
            ranked,
            buckets,
            rejected,
        }
    }

    /// Like [`rank`](Self::rank), but fails on the first item that does
    /// not classify.
    pub fn rank_strict(&self, items: &[Item]) -> Result<RankingOutcome, UrgencyError> {
        let mut outcome = self.rank(items);
        if !outcome.rejected.is_empty() {
            return Err(outcome.rejected.remove(0).error);
        }
        Ok(outcome)
    }
}
