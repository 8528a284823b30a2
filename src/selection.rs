//! Item selection pipeline.
//!
//! Given the full normalized item list, produces the final ordered,
//! bounded list to render: deduplicate, filter by relevance, filter by a
//! two-tier recency window, sort by date descending, truncate.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::SelectionConfig;
use crate::feed::types::NormalizedItem;

/// Select the items to render, in final output order.
///
/// `now` is passed in so the recency cutoffs are computed once per run and
/// the pipeline stays deterministic under test.
pub fn select_items(
    items: Vec<NormalizedItem>,
    config: &SelectionConfig,
    now: DateTime<Utc>,
) -> Vec<NormalizedItem> {
    let mut items = dedupe(items);

    if config.relevance_enabled {
        let keywords: Vec<String> = config
            .relevance_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();
        items.retain(|item| is_relevant(item, &keywords));
    }

    // Prefer the tight window; broaden to the loose window only when the
    // fallback is enabled and too few fresh items exist.
    let tight_cutoff = now - Duration::hours(config.tight_window_hours);
    let cutoff = if config.fallback_min_items > 0 {
        let fresh = items.iter().filter(|it| it.date > tight_cutoff).count();
        if fresh < config.fallback_min_items {
            debug!(
                "Only {} item(s) within {}h, widening to {} day(s)",
                fresh, config.tight_window_hours, config.loose_window_days
            );
            now - Duration::days(config.loose_window_days)
        } else {
            tight_cutoff
        }
    } else {
        tight_cutoff
    };
    items.retain(|it| it.date > cutoff);

    // Stable sort: items with equal dates keep their input order.
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(config.max_items);
    items
}

/// Drop duplicate items, keeping the first occurrence of each dedup key.
///
/// Items with an empty key (no link) are all kept; they are never treated
/// as duplicates of one another.
fn dedupe(items: Vec<NormalizedItem>) -> Vec<NormalizedItem> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        let key = item.dedup_key();
        if key.is_empty() || seen.insert(key) {
            out.push(item);
        }
    }

    out
}

/// Case-insensitive keyword match against the item's title and link.
///
/// `keywords` must already be lowercased.
fn is_relevant(item: &NormalizedItem, keywords: &[String]) -> bool {
    let haystack = format!("{} {}", item.title, item.link).to_lowercase();
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
