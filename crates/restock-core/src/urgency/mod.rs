//! Urgency engine: per-item classification, tier buckets, and the
//! display ordering over the whole list.

mod buckets;
mod classifier;
mod ranker;

pub use buckets::{TierCounts, UrgencyBuckets};
pub use classifier::{
    classify, Classification, UrgencyTier, DORMANCY_DAYS, INACTIVE_SCORE,
};
pub use ranker::{RankedItem, RankingOutcome, RejectedItem, UrgencyRanker};
