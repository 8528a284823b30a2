//! Pipeline orchestration.
//!
//! One run: fetch all configured feeds, normalize, select, render, write.

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::feed::collector::{collect_feeds, normalize};
use crate::feed::fetcher::FeedFetcher;
use crate::feed::types::FetchOutcome;
use crate::render::{render_page, write_page};
use crate::selection::select_items;
use crate::Result;

/// Run the briefing pipeline once.
///
/// Per-feed failures are logged and tolerated; only a render/write failure
/// aborts the run. Returns the number of items rendered.
pub async fn run(config: &Config) -> Result<usize> {
    let now = Utc::now();
    let tz = config.briefing.display_tz();

    let fetcher = FeedFetcher::new(&config.fetch)?;
    let outcomes = collect_feeds(&fetcher, &config.feeds.urls).await;

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, FetchOutcome::Failed { .. }))
        .count();
    let items = normalize(outcomes);
    info!(
        "Collected {} item(s) from {} feed(s) ({} failed)",
        items.len(),
        config.feeds.urls.len(),
        failed
    );

    let selected = select_items(items, &config.selection, now);

    let html = render_page(&selected, now, &config.briefing, &tz);
    write_page(&config.output.path, &html)?;

    info!("Wrote {} item(s) to {}", selected.len(), config.output.path);
    Ok(selected.len())
}
