//! Ranked list display.

use chrono::Utc;
use restock_core::{RankedItem, UrgencyRanker, UrgencyTier};

use crate::config::Config;
use crate::store::ItemStore;

pub fn run(json: bool, tier: Option<String>, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = ItemStore::open()?;
    let list = store.load()?;
    let config = Config::load()?;

    let outcome = UrgencyRanker::new(Utc::now()).rank(list.items());

    let tier_filter = tier.as_deref().map(parse_tier).transpose()?;
    let show_inactive = all || config.items.show_inactive;
    let visible: Vec<&RankedItem> = outcome
        .ranked
        .iter()
        .filter(|r| tier_filter.map_or(true, |t| r.tier == t))
        .filter(|r| show_inactive || r.tier != UrgencyTier::Inactive)
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "items": visible,
                "counts": outcome.buckets.counts(),
                "rejected": outcome.rejected,
            }))?
        );
        return Ok(());
    }

    if visible.is_empty() {
        println!("Nothing on the list.");
    } else {
        for ranked in &visible {
            println!(
                "{:>5}  {:<11} {}",
                score_label(ranked),
                ranked.tier.as_str(),
                ranked.item.name
            );
        }
    }

    let counts = outcome.buckets.counts();
    println!();
    println!(
        "overdue {} | soon {} | kindOfSoon {} | notSoon {} | inactive {}",
        counts.overdue, counts.soon, counts.kind_of_soon, counts.not_soon, counts.inactive
    );

    for rejected in &outcome.rejected {
        eprintln!("warning: skipped '{}': {}", rejected.name, rejected.error);
    }

    Ok(())
}

/// Days-until column; dormant items show a dash instead of the sentinel.
fn score_label(ranked: &RankedItem) -> String {
    if ranked.tier == UrgencyTier::Inactive {
        "-".to_string()
    } else {
        ranked.score.to_string()
    }
}

fn parse_tier(s: &str) -> Result<UrgencyTier, Box<dyn std::error::Error>> {
    match s {
        "overdue" => Ok(UrgencyTier::Overdue),
        "soon" => Ok(UrgencyTier::Soon),
        "kind-of-soon" | "kindOfSoon" => Ok(UrgencyTier::KindOfSoon),
        "not-soon" | "notSoon" => Ok(UrgencyTier::NotSoon),
        "inactive" => Ok(UrgencyTier::Inactive),
        _ => Err(format!("unknown tier: {s}").into()),
    }
}
