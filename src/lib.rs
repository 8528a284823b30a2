//! glassbrief - Automotive glass industry news briefing.
//!
//! A batch job that fetches configured RSS/Atom feeds, selects recent
//! relevant headlines, and renders a static HTML briefing page.

pub mod app;
pub mod config;
pub mod datetime;
pub mod error;
pub mod feed;
pub mod logging;
pub mod render;
pub mod selection;

pub use config::Config;
pub use error::{GlassbriefError, Result};
pub use feed::{
    collect_feeds, normalize, FeedFetcher, FetchOutcome, NormalizedItem, ParsedFeed, ParsedItem,
};
pub use render::{escape_html, render_page, write_page};
pub use selection::select_items;
