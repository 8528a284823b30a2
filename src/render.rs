//! Static HTML rendering for the briefing page.
//!
//! Produces one standalone HTML5 document with inline styles only, safe to
//! serve as a static site. All feed-supplied text is escaped before it is
//! embedded.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::config::BriefingConfig;
use crate::datetime::format_in_zone;
use crate::error::Result;
use crate::feed::types::NormalizedItem;

/// Inline stylesheet for the briefing page.
const STYLE: &str = r#"    :root { color-scheme: light dark; }
    body { margin: 0; font: 16px/1.5 -apple-system, BlinkMacSystemFont, Segoe UI, Roboto, Helvetica, Arial, sans-serif; }
    header { padding: 32px 20px; text-align: center; background: #0b132b; color: #e0e6f8; }
    h1 { margin: 0 0 8px; font-size: 28px; }
    .date { opacity: 0.9; }
    main { max-width: 820px; margin: 24px auto; padding: 0 16px 40px; }
    ul { list-style: none; padding: 0; margin: 0; }
    li { padding: 14px 12px; border-bottom: 1px solid rgba(0,0,0,0.08); display: grid; grid-template-columns: 1fr auto; gap: 8px; align-items: baseline; }
    li a { color: #174ea6; text-decoration: none; font-weight: 600; }
    li a:hover { text-decoration: underline; }
    .src { font-size: 12px; opacity: 0.7; margin-left: 8px; }
    time { font-size: 12px; opacity: 0.7; }
    footer { text-align: center; padding: 20px; opacity: 0.7; font-size: 13px; }"#;

/// Format of the "generated at" line in the page header.
const GENERATED_AT_FORMAT: &str = "%A, %B %-d, %Y (%Z)";

/// Format of the per-item timestamp. Item times are pinned to the same
/// configured zone as the header.
const ITEM_TIME_FORMAT: &str = "%I:%M %p, %b %-d";

/// Escape text for embedding in HTML content or attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the briefing page for the given items.
pub fn render_page(
    items: &[NormalizedItem],
    generated_at: DateTime<Utc>,
    briefing: &BriefingConfig,
    tz: &Tz,
) -> String {
    let date_line = format_in_zone(&generated_at, tz, GENERATED_AT_FORMAT);

    let mut list = String::new();
    if items.is_empty() {
        list.push_str(&format!(
            "      <li>{}</li>\n",
            escape_html(&briefing.empty_message)
        ));
    } else {
        for item in items {
            let time = format_in_zone(&item.date, tz, ITEM_TIME_FORMAT);
            list.push_str(&format!(
                concat!(
                    "      <li>\n",
                    "        <a href=\"{link}\" target=\"_blank\" rel=\"noopener\">{title}</a>\n",
                    "        <span class=\"src\">{source}</span>\n",
                    "        <time>{time}</time>\n",
                    "      </li>\n"
                ),
                link = escape_html(&item.link),
                title = escape_html(&item.title),
                source = escape_html(&item.source),
                time = time,
            ));
        }
    }

    format!(
        concat!(
            "<!doctype html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\" />\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n",
            "  <title>{title}</title>\n",
            "  <meta name=\"description\" content=\"{description}\" />\n",
            "  <style>\n{style}\n  </style>\n",
            "</head>\n",
            "<body>\n",
            "  <header>\n",
            "    <h1>{title}</h1>\n",
            "    <div class=\"date\">{date_line}</div>\n",
            "  </header>\n",
            "  <main>\n",
            "    <ul>\n",
            "{list}",
            "    </ul>\n",
            "  </main>\n",
            "  <footer>\n",
            "    {footer}\n",
            "  </footer>\n",
            "</body>\n",
            "</html>\n"
        ),
        title = escape_html(&briefing.title),
        description = escape_html(&briefing.description),
        style = STYLE,
        date_line = escape_html(&date_line),
        list = list,
        footer = escape_html(&briefing.footer),
    )
}

/// Write the rendered page to the output path, overwriting prior content.
///
/// Creates missing parent directories. Write failures propagate to the
/// caller; an unwritable output file fails the whole run.
pub fn write_page<P: AsRef<Path>>(path: P, html: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    debug!("Wrote {} byte(s) to {}", html.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pacific() -> Tz {
        chrono_tz::America::Los_Angeles
    }

    fn generated_at() -> DateTime<Utc> {
        // 2025-08-06 19:30 UTC = 12:30 PDT
        Utc.with_ymd_and_hms(2025, 8, 6, 19, 30, 0).unwrap()
    }

    fn item(title: &str, link: &str) -> NormalizedItem {
        NormalizedItem {
            source: "Example News".to_string(),
            title: title.to_string(),
            link: link.to_string(),
            date: generated_at(),
        }
    }

    #[test]
    fn test_escape_html_unsafe_characters() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a \"quoted\" value"), "a &quot;quoted&quot; value");
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // Ampersands must be escaped before the other replacements, or
        // already-escaped text would be double-mangled.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("R&D <lab>"), "R&amp;D &lt;lab&gt;");
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Windshield recall"), "Windshield recall");
    }

    #[test]
    fn test_render_page_contains_items() {
        let items = vec![item("Windshield recall", "https://example.com/1")];
        let html = render_page(&items, generated_at(), &BriefingConfig::default(), &pacific());

        assert!(html.contains("<a href=\"https://example.com/1\""));
        assert!(html.contains("Windshield recall</a>"));
        assert!(html.contains("<span class=\"src\">Example News</span>"));
        // Item time rendered in the configured zone
        assert!(html.contains("<time>12:30 PM, Aug 6</time>"));
    }

    #[test]
    fn test_render_page_generated_at_line() {
        let html = render_page(&[], generated_at(), &BriefingConfig::default(), &pacific());
        assert!(html.contains("Wednesday, August 6, 2025 (PDT)"));
    }

    #[test]
    fn test_render_page_escapes_hostile_title() {
        let items = vec![item("<script>alert('x')</script>", "https://example.com/1")];
        let html = render_page(&items, generated_at(), &BriefingConfig::default(), &pacific());

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_page_escapes_link_attribute() {
        let items = vec![item("Title", "https://example.com/1?a=\"b\"")];
        let html = render_page(&items, generated_at(), &BriefingConfig::default(), &pacific());
        assert!(html.contains("href=\"https://example.com/1?a=&quot;b&quot;\""));
    }

    #[test]
    fn test_render_page_empty_list_placeholder() {
        let config = BriefingConfig::default();
        let html = render_page(&[], generated_at(), &config, &pacific());
        assert!(html.contains(&config.empty_message));
        // The list element itself is still present and well-formed
        assert!(html.contains("<ul>"));
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_render_page_is_standalone_html5() {
        let html = render_page(&[], generated_at(), &BriefingConfig::default(), &pacific());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link rel="));
    }

    #[test]
    fn test_write_page_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("index.html");
        write_page(&path, "<!doctype html>\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<!doctype html>\n");
    }

    #[test]
    fn test_write_page_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        write_page(&path, "old").unwrap();
        write_page(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
