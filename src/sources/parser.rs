//! Syndication document parsing.
//!
//! feed-rs handles both RSS and Atom. Feeds in the wild are frequently
//! malformed, so a parse failure gets one cleanup-and-reparse attempt
//! before the document is given up on.

use anyhow::{anyhow, Result};
use feed_rs::parser;
use std::io::Cursor;
use tracing::debug;
use url::Url;

use super::types::Article;
use crate::TARGET_WEB_REQUEST;

/// Parse a syndication document into normalized articles.
pub fn parse_feed(body: &str, origin: &Url) -> Result<Vec<Article>> {
    let reader = Cursor::new(body);
    match parser::parse(reader) {
        Ok(feed) => Ok(entries_to_articles(feed.entries, origin)),
        Err(first_err) => {
            let cleaned = cleanup_xml(body);
            if !cleaned.contains("<rss") && !cleaned.contains("<feed") {
                return Err(anyhow!("Content is not an RSS or Atom feed: {}", first_err));
            }

            let reader = Cursor::new(cleaned);
            match parser::parse(reader) {
                Ok(feed) => {
                    debug!(target: TARGET_WEB_REQUEST, "Feed parsed successfully after XML cleanup");
                    Ok(entries_to_articles(feed.entries, origin))
                }
                Err(second_err) => Err(anyhow!(
                    "Failed to parse feed even after cleanup. First error: {}. Second error: {}",
                    first_err,
                    second_err
                )),
            }
        }
    }
}

fn entries_to_articles(entries: Vec<feed_rs::model::Entry>, origin: &Url) -> Vec<Article> {
    let mut articles = Vec::with_capacity(entries.len());

    for entry in entries {
        // An entry we cannot link to is not servable.
        let Some(href) = entry.links.first().map(|link| link.href.clone()) else {
            continue;
        };
        let Some(url) = resolve_url(&href, origin) else {
            continue;
        };

        let last_updated = entry
            .published
            .or(entry.updated)
            .map(|date| date.to_rfc2822());

        articles.push(Article {
            title: entry.title.map(|title| title.content),
            url,
            last_updated,
            user: entry.authors.first().map(|author| author.name.clone()),
        });
    }

    articles
}

/// Resolve a possibly-relative link against the source origin.
pub fn resolve_url(href: &str, origin: &Url) -> Option<String> {
    match Url::parse(href) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            origin.join(href).ok().map(|resolved| resolved.to_string())
        }
        Err(_) => None,
    }
}

const ENTITY_FIXES: &[(&str, &str)] = &[
    ("&nbsp;", "&#160;"),
    ("&ndash;", "&#8211;"),
    ("&mdash;", "&#8212;"),
    ("&rsquo;", "&#8217;"),
    ("&lsquo;", "&#8216;"),
    ("&rdquo;", "&#8221;"),
    ("&ldquo;", "&#8220;"),
    ("&amp;amp;", "&amp;"),
    ("&apos;", "&#39;"),
];

/// Clean up malformed XML ahead of a reparse attempt.
fn cleanup_xml(xml: &str) -> String {
    let mut cleaned = xml.trim().trim_start_matches('\u{FEFF}').to_string();

    // Drop any junk before the document proper.
    for marker in ["<?xml", "<rss", "<feed"] {
        if let Some(start) = cleaned.find(marker) {
            cleaned = cleaned[start..].to_string();
            break;
        }
    }

    for (entity, replacement) in ENTITY_FIXES {
        cleaned = cleaned.replace(entity, replacement);
    }

    // Strip characters that are not valid in XML 1.0.
    cleaned = cleaned
        .chars()
        .filter(|&c| {
            matches!(c,
                '\u{0009}' | '\u{000A}' | '\u{000D}' |
                '\u{0020}'..='\u{D7FF}' |
                '\u{E000}'..='\u{FFFD}' |
                '\u{10000}'..='\u{10FFFF}'
            )
        })
        .collect();

    if !cleaned.starts_with("<?xml") {
        cleaned = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", cleaned);
    }

    cleaned
}
