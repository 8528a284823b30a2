//! Feed fetching and normalization for glassbrief.
//!
//! This module turns configured feed URLs into one flat list of
//! canonical items, tolerating per-feed failures.

pub mod collector;
pub mod fetcher;
pub mod types;

pub use collector::{collect_feeds, normalize};
pub use fetcher::{validate_url, FeedFetcher};
pub use types::{FetchOutcome, NormalizedItem, ParsedFeed, ParsedItem, UNTITLED_PLACEHOLDER};
