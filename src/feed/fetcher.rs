//! RSS/Atom feed fetcher.
//!
//! This module provides functionality to fetch and parse syndication feeds
//! with timeouts and resource limits taken from the fetch configuration.

use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{GlassbriefError, Result};
use crate::feed::types::{ParsedFeed, ParsedItem};

/// Feed fetcher holding a per-run HTTP client.
///
/// The client is constructed locally from configuration and passed
/// explicitly; there is no global parser or client state.
pub struct FeedFetcher {
    client: Client,
    max_feed_size: u64,
}

impl FeedFetcher {
    /// Create a new fetcher from the fetch configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GlassbriefError::Feed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_feed_size: config.max_feed_size_bytes,
        })
    }

    /// Fetch and parse a feed from the given URL.
    ///
    /// Performs one GET with no retries; any failure is reported to the
    /// caller, which decides whether to continue with other feeds.
    pub async fn fetch(&self, url: &str) -> Result<ParsedFeed> {
        validate_url(url)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GlassbriefError::Feed(format!("failed to fetch feed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GlassbriefError::Feed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        // Check content length if available
        if let Some(content_length) = response.content_length() {
            if content_length > self.max_feed_size {
                return Err(GlassbriefError::Feed(format!(
                    "feed too large: {} bytes (max {} bytes)",
                    content_length, self.max_feed_size
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GlassbriefError::Feed(format!("failed to read response: {}", e)))?;

        if bytes.len() as u64 > self.max_feed_size {
            return Err(GlassbriefError::Feed(format!(
                "feed too large: {} bytes (max {} bytes)",
                bytes.len(),
                self.max_feed_size
            )));
        }

        parse_feed(&bytes)
    }
}

/// Validate that a URL is a well-formed http(s) URL.
pub fn validate_url(url: &str) -> Result<()> {
    let parsed =
        url::Url::parse(url).map_err(|e| GlassbriefError::Feed(format!("invalid URL: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(GlassbriefError::Feed(format!(
            "unsupported URL scheme: {}",
            scheme
        ))),
    }
}

/// Parse feed bytes into a ParsedFeed.
fn parse_feed(bytes: &[u8]) -> Result<ParsedFeed> {
    let feed = parser::parse(bytes)
        .map_err(|e| GlassbriefError::Feed(format!("failed to parse feed: {}", e)))?;

    let title = feed.title.map(|t| t.content).filter(|t| !t.is_empty());

    let items: Vec<ParsedItem> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let item_title = entry.title.map(|t| t.content);
            let link = entry.links.first().map(|l| l.href.clone());
            // RSS pubDate and Atom published both land in `published`;
            // Atom entries without it often carry `updated` instead.
            let published = entry.published.or(entry.updated);

            ParsedItem {
                title: item_title,
                link,
                published,
            }
        })
        .collect();

    Ok(ParsedFeed { title, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_validate_url_valid_https() {
        assert!(validate_url("https://example.com/feed.xml").is_ok());
    }

    #[test]
    fn test_validate_url_valid_http() {
        assert!(validate_url("http://example.com/feed.xml").is_ok());
    }

    #[test]
    fn test_validate_url_invalid_scheme() {
        let result = validate_url("ftp://example.com/feed.xml");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unsupported URL scheme"));
    }

    #[test]
    fn test_validate_url_not_a_url() {
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_parse_feed_rss() {
        let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Glass Trade News</title>
    <link>https://example.com</link>
    <description>A test feed</description>
    <item>
      <title>Windshield plant opens</title>
      <link>https://example.com/1</link>
      <guid>guid-1</guid>
      <pubDate>Wed, 06 Aug 2025 14:30:00 GMT</pubDate>
    </item>
    <item>
      <title>Second story</title>
      <link>https://example.com/2</link>
      <guid>guid-2</guid>
    </item>
  </channel>
</rss>"#;

        let feed = parse_feed(rss.as_bytes()).unwrap();
        assert_eq!(feed.title, Some("Glass Trade News".to_string()));
        assert_eq!(feed.items.len(), 2);
        assert_eq!(
            feed.items[0].title,
            Some("Windshield plant opens".to_string())
        );
        assert_eq!(feed.items[0].link, Some("https://example.com/1".to_string()));

        let published = feed.items[0].published.unwrap();
        assert_eq!(published.year(), 2025);
        assert_eq!(published.month(), 8);
        assert_eq!(published.day(), 6);
        assert_eq!(published.hour(), 14);

        // No pubDate on the second item
        assert!(feed.items[1].published.is_none());
    }

    #[test]
    fn test_parse_feed_atom_falls_back_to_updated() {
        let atom = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Feed</title>
  <link href="https://example.com"/>
  <entry>
    <id>urn:uuid:1</id>
    <title>Atom Entry</title>
    <link href="https://example.com/entry"/>
    <updated>2025-01-01T00:00:00Z</updated>
  </entry>
</feed>"#;

        let feed = parse_feed(atom.as_bytes()).unwrap();
        assert_eq!(feed.title, Some("Atom Feed".to_string()));
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].title, Some("Atom Entry".to_string()));
        assert!(feed.items[0].published.is_some());
    }

    #[test]
    fn test_parse_feed_minimal() {
        let rss = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <item>
      <guid>1</guid>
    </item>
  </channel>
</rss>"#;

        let feed = parse_feed(rss.as_bytes()).unwrap();
        assert_eq!(feed.title, None);
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].title, None);
        assert!(feed.items[0].published.is_none());
    }

    #[test]
    fn test_parse_feed_invalid() {
        let invalid = "This is not XML";
        assert!(parse_feed(invalid.as_bytes()).is_err());
    }
}
