//! Date/time utilities for glassbrief.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Normalize an optional feed timestamp to a total-ordered date.
///
/// Absent or unparsable dates become the Unix epoch rather than "now", so
/// undated items sort last and fail any positive-age recency cutoff.
pub fn normalize_date(parsed: Option<DateTime<Utc>>) -> DateTime<Utc> {
    parsed.unwrap_or(DateTime::UNIX_EPOCH)
}

/// Format a UTC datetime in the given timezone.
///
/// # Arguments
///
/// * `dt` - DateTime in UTC
/// * `tz` - Target timezone
/// * `format` - Output format string (e.g., "%A, %B %-d, %Y")
pub fn format_in_zone(dt: &DateTime<Utc>, tz: &Tz, format: &str) -> String {
    dt.with_timezone(tz).format(format).to_string()
}
