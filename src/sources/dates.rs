//! Publish-timestamp resolution.
//!
//! Articles carry their publish time in whatever form the publisher felt
//! like: a machine-readable `<time>` element, a metadata tag, or nothing
//! but a dated path segment in the URL. The resolver walks those signals
//! in priority order and returns the first hit.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::TARGET_WEB_REQUEST;

static DATED_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(20\d{2})/(\d{2})/(\d{2})/").unwrap());

/// Determine a best-effort publish timestamp for an article.
///
/// Priority order, first match wins:
/// 1. a `<time data-testid="published-timestamp">` element with a
///    `datetime` attribute, returned verbatim;
/// 2. a `<meta name="article:published_time">` tag, content returned
///    verbatim;
/// 3. a `/YYYY/MM/DD/` segment in the URL, validated as a calendar date
///    and rendered as an ISO date with no time component.
///
/// Returns `None` when no signal is found; never fails.
pub fn resolve_published(url: &str, document: Option<&Html>) -> Option<String> {
    if let Some(document) = document {
        let time_selector =
            Selector::parse(r#"time[data-testid="published-timestamp"]"#).unwrap();
        if let Some(datetime) = document
            .select(&time_selector)
            .find_map(|el| el.value().attr("datetime"))
        {
            debug!(target: TARGET_WEB_REQUEST, "Found published timestamp in <time> for {}: {}", url, datetime);
            return Some(datetime.to_string());
        }

        let meta_selector = Selector::parse(r#"meta[name="article:published_time"]"#).unwrap();
        if let Some(content) = document
            .select(&meta_selector)
            .find_map(|el| el.value().attr("content"))
        {
            debug!(target: TARGET_WEB_REQUEST, "Found published timestamp in <meta> for {}: {}", url, content);
            return Some(content.to_string());
        }
    }

    match date_from_path(url) {
        Some(date) => Some(date.format("%Y-%m-%d").to_string()),
        None => {
            debug!(target: TARGET_WEB_REQUEST, "No publish date found for {}", url);
            None
        }
    }
}

/// Whether a URL carries a `/YYYY/MM/DD/` path segment at all.
///
/// Pattern match only; the segment may still name an impossible date.
pub fn has_dated_path(url: &str) -> bool {
    DATED_PATH.is_match(url)
}

/// Extract a `/YYYY/MM/DD/` path segment as a calendar date.
///
/// Segments that match the pattern but name an impossible date (month 13,
/// day 40) are a non-match, not an error.
pub fn date_from_path(url: &str) -> Option<NaiveDate> {
    let caps = DATED_PATH.captures(url)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a date string in the formats the sources actually emit.
///
/// Feed entries carry RFC 2822 timestamps, page metadata carries RFC 3339,
/// and the URL fallback produces bare ISO dates (parsed as midnight UTC).
pub fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc2822(date_str) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(date_str) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&date));
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}
