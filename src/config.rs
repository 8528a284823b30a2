//! Configuration module for glassbrief.

use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;

use crate::{GlassbriefError, Result};

/// Briefing page configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BriefingConfig {
    /// Page title shown in the header and the document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Page meta description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Footer text listing the sources.
    #[serde(default = "default_footer")]
    pub footer: String,
    /// List entry shown when no headlines qualified.
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    /// Timezone for displaying dates (e.g., "America/Los_Angeles", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_title() -> String {
    "Automotive Glass Daily Briefing".to_string()
}

fn default_description() -> String {
    "Curated headlines on automotive glass: windshield replacement, \
     ADAS calibration, supply chain, and industry news."
        .to_string()
}

fn default_footer() -> String {
    "Sources: Google News queries, glassBYTEs, AGRR Magazine, Repairer Driven News, IIHS, NHTSA."
        .to_string()
}

fn default_empty_message() -> String {
    "No recent headlines matched yet. Please check back soon.".to_string()
}

fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}

impl BriefingConfig {
    /// Parse the configured display timezone.
    ///
    /// Falls back to UTC for unknown names; `Config::validate` rejects
    /// those upfront so the fallback is not reached from a validated config.
    pub fn display_tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(chrono_tz::UTC)
    }
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            footer: default_footer(),
            empty_message: default_empty_message(),
            timezone: default_timezone(),
        }
    }
}

/// Feed source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedsConfig {
    /// Ordered list of feed URLs to fetch.
    #[serde(default = "default_feed_urls")]
    pub urls: Vec<String>,
}

fn default_feed_urls() -> Vec<String> {
    // Targeted Google News queries, industry trade feeds, safety orgs.
    [
        "https://news.google.com/rss/search?q=%28automotive+windshield+OR+windscreen+OR+%22auto+glass%22+OR+%22windshield+replacement%22+OR+%22windshield+repair%22+OR+%22ADAS+calibration%22%29&hl=en-US&gl=US&ceid=US:en",
        "https://news.google.com/rss/search?q=%28windshield+recall+OR+windshield+crack+OR+laminated+glass%29&hl=en-US&gl=US&ceid=US:en",
        "https://news.google.com/rss/search?q=%28Safelite+OR+Belron+OR+Pilkington+OR+NSG+OR+Xinyi+Glass%29+%28windshield+OR+glass%29&hl=en-US&gl=US&ceid=US:en",
        "https://www.glassbytes.com/feed/",
        "https://www.agrrmag.com/feed/",
        "https://www.repairerdrivennews.com/feed/",
        "https://www.iihs.org/rss/news",
        "https://www.nhtsa.gov/rss",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            urls: default_feed_urls(),
        }
    }
}

/// HTTP fetch configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds.
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_total_timeout")]
    pub total_timeout_secs: u64,
    /// Maximum number of redirects.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
    /// Maximum feed size in bytes.
    #[serde(default = "default_max_feed_size")]
    pub max_feed_size_bytes: u64,
    /// User agent string for feed requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_read_timeout() -> u64 {
    20
}

fn default_total_timeout() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    5
}

fn default_max_feed_size() -> u64 {
    5 * 1024 * 1024 // 5MB
}

fn default_user_agent() -> String {
    "glassbrief/0.1 (RSS briefing)".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            total_timeout_secs: default_total_timeout(),
            max_redirects: default_max_redirects(),
            max_feed_size_bytes: default_max_feed_size(),
            user_agent: default_user_agent(),
        }
    }
}

/// Item selection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Preferred recency window in hours.
    #[serde(default = "default_tight_window")]
    pub tight_window_hours: i64,
    /// Fallback recency window in days, used when the tight window is quiet.
    #[serde(default = "default_loose_window")]
    pub loose_window_days: i64,
    /// Minimum tight-window items before falling back to the loose window.
    /// Zero disables the fallback entirely.
    #[serde(default = "default_fallback_min_items")]
    pub fallback_min_items: usize,
    /// Maximum number of items to render.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Whether the keyword relevance filter is applied.
    #[serde(default = "default_relevance_enabled")]
    pub relevance_enabled: bool,
    /// Case-insensitive keywords matched against item title + link.
    #[serde(default = "default_relevance_keywords")]
    pub relevance_keywords: Vec<String>,
}

fn default_tight_window() -> i64 {
    72
}

fn default_loose_window() -> i64 {
    14
}

fn default_fallback_min_items() -> usize {
    10
}

fn default_max_items() -> usize {
    40
}

fn default_relevance_enabled() -> bool {
    true
}

fn default_relevance_keywords() -> Vec<String> {
    // "autoglass" is listed separately so the one-word spelling matches too.
    [
        "windshield",
        "windscreen",
        "auto glass",
        "autoglass",
        "adas",
        "calibration",
        "glassbyte",
        "safelite",
        "belron",
        "pilkington",
        "laminated",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tight_window_hours: default_tight_window(),
            loose_window_days: default_loose_window(),
            fallback_min_items: default_fallback_min_items(),
            max_items: default_max_items(),
            relevance_enabled: default_relevance_enabled(),
            relevance_keywords: default_relevance_keywords(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated HTML file.
    #[serde(default = "default_output_path")]
    pub path: String,
}

fn default_output_path() -> String {
    "docs/index.html".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Briefing page configuration.
    #[serde(default)]
    pub briefing: BriefingConfig,
    /// Feed source configuration.
    #[serde(default)]
    pub feeds: FeedsConfig,
    /// HTTP fetch configuration.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Item selection configuration.
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(GlassbriefError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| GlassbriefError::Config(format!("config parse error: {e}")))
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - No feed URLs are configured
    /// - `max_items` is zero
    /// - The tight recency window is zero hours
    /// - The display timezone is not a known IANA name
    pub fn validate(&self) -> Result<()> {
        if self.feeds.urls.is_empty() {
            return Err(GlassbriefError::Config(
                "no feed URLs configured".to_string(),
            ));
        }
        if self.selection.max_items == 0 {
            return Err(GlassbriefError::Config(
                "selection.max_items must be greater than zero".to_string(),
            ));
        }
        if self.selection.tight_window_hours <= 0 {
            return Err(GlassbriefError::Config(
                "selection.tight_window_hours must be greater than zero".to_string(),
            ));
        }
        if self.briefing.timezone.parse::<Tz>().is_err() {
            return Err(GlassbriefError::Config(format!(
                "unknown timezone: {}",
                self.briefing.timezone
            )));
        }
        Ok(())
    }
}
