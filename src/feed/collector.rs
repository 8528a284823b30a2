//! Feed collection and normalization.
//!
//! Fetches every configured source in order, tolerating per-feed failures,
//! and flattens the successful results into one canonical item list.

use tracing::{debug, info, warn};

use crate::feed::fetcher::FeedFetcher;
use crate::feed::types::{FetchOutcome, NormalizedItem};

/// Fetch all configured feed URLs sequentially.
///
/// A failed fetch is recorded as a `FetchOutcome::Failed` and logged with
/// the offending URL; it never aborts the remaining feeds.
pub async fn collect_feeds(fetcher: &FeedFetcher, urls: &[String]) -> Vec<FetchOutcome> {
    let mut outcomes = Vec::with_capacity(urls.len());

    for url in urls {
        if url.trim().is_empty() {
            debug!("Skipping empty feed URL");
            continue;
        }

        debug!("Fetching feed: {}", url);
        match fetcher.fetch(url).await {
            Ok(feed) => {
                info!("Fetched feed {}: {} item(s)", url, feed.items.len());
                outcomes.push(FetchOutcome::Fetched {
                    url: url.clone(),
                    feed,
                });
            }
            Err(e) => {
                warn!("Feed error {}: {}", url, e);
                outcomes.push(FetchOutcome::Failed {
                    url: url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    outcomes
}

/// Flatten fetch outcomes into a single list of normalized items.
///
/// The source name of each item is its feed's title, or the configured URL
/// when the feed supplies no title.
pub fn normalize(outcomes: Vec<FetchOutcome>) -> Vec<NormalizedItem> {
    let mut items = Vec::new();

    for outcome in outcomes {
        if let FetchOutcome::Fetched { url, feed } = outcome {
            let source = match &feed.title {
                Some(title) if !title.is_empty() => title.clone(),
                _ => url.clone(),
            };
            for item in feed.items {
                items.push(NormalizedItem::from_parsed(item, &source));
            }
        }
    }

    items
}
