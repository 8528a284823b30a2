//! Feed types for glassbrief.

use chrono::{DateTime, Utc};

use crate::datetime::normalize_date;

/// Title used when a feed item has no title of its own.
pub const UNTITLED_PLACEHOLDER: &str = "(untitled)";

/// Parsed feed data from external source.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    /// Feed display title, if the feed supplies one.
    pub title: Option<String>,
    /// Parsed items.
    pub items: Vec<ParsedItem>,
}

/// Parsed item data from external source.
#[derive(Debug, Clone)]
pub struct ParsedItem {
    /// Item title.
    pub title: Option<String>,
    /// Link to the original article.
    pub link: Option<String>,
    /// When the item was published.
    pub published: Option<DateTime<Utc>>,
}

/// Result of one feed fetch attempt.
///
/// A failed feed contributes zero items; the remaining feeds still run.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The feed responded and parsed.
    Fetched {
        /// The configured source URL.
        url: String,
        /// The parsed feed.
        feed: ParsedFeed,
    },
    /// The fetch or parse failed.
    Failed {
        /// The configured source URL.
        url: String,
        /// Failure description.
        reason: String,
    },
}

/// A feed item in canonical form, ready for selection and rendering.
#[derive(Debug, Clone)]
pub struct NormalizedItem {
    /// Display name of the originating feed.
    pub source: String,
    /// Item headline.
    pub title: String,
    /// Item URL; empty when the feed supplied none.
    pub link: String,
    /// Publication time; the Unix epoch when absent or unparsable.
    pub date: DateTime<Utc>,
}

impl NormalizedItem {
    /// Build a canonical item from a raw parsed item and its feed's
    /// display name.
    pub fn from_parsed(item: ParsedItem, source: &str) -> Self {
        let title = match item.title {
            Some(t) if !t.is_empty() => t,
            _ => UNTITLED_PLACEHOLDER.to_string(),
        };
        Self {
            source: source.to_string(),
            title,
            link: item.link.unwrap_or_default(),
            date: normalize_date(item.published),
        }
    }

    /// Deduplication key: the link truncated at the first `?`, lowercased.
    ///
    /// Collapses syndication duplicates that differ only in tracking
    /// parameters. Empty for un-linked items, which are never deduplicated.
    pub fn dedup_key(&self) -> String {
        let canonical = match self.link.find('?') {
            Some(pos) => &self.link[..pos],
            None => self.link.as_str(),
        };
        canonical.to_lowercase()
    }
}
