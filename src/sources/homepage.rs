//! Homepage-scraping sources.
//!
//! Extension point for outlets without a usable feed: scan the homepage for
//! anchors whose path carries a publish date, then fetch each article page
//! to pin the timestamp down. Not in the default registry (the configured
//! outlets all publish feeds) but kept to the same contract as the feed
//! path so a scraped source can be swapped in without touching the ranker.

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use super::client::{fetch_last_modified, fetch_text};
use super::dates::{has_dated_path, resolve_published};
use super::parser::resolve_url;
use super::types::{Article, PAGE_REQUEST_TIMEOUT, REQUEST_TIMEOUT};
use super::NewsSource;
use crate::TARGET_WEB_REQUEST;

/// A source scraped from an outlet's homepage markup.
pub struct HomepageSource {
    name: String,
    origin: Url,
    page_url: String,
}

impl HomepageSource {
    pub fn new(name: &str, origin: &str, page_url: &str) -> Self {
        Self {
            name: name.to_string(),
            origin: Url::parse(origin).expect("source origin must be an absolute URL"),
            page_url: page_url.to_string(),
        }
    }
}

#[async_trait]
impl NewsSource for HomepageSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> &Url {
        &self.origin
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<Article>> {
        let body = fetch_text(client, &self.page_url, REQUEST_TIMEOUT)
            .await
            .with_context(|| format!("Failed to retrieve homepage {}", self.page_url))?;

        let links = scan_article_links(&body, &self.origin);
        debug!(target: TARGET_WEB_REQUEST, "Found {} dated article links on {}", links.len(), self.page_url);

        let mut articles = Vec::with_capacity(links.len());
        for (title, url) in links {
            // Secondary fetch of the article page itself; a failure here
            // only costs us the in-page timestamp signals.
            let page = match fetch_text(client, &url, PAGE_REQUEST_TIMEOUT).await {
                Ok(page) => Some(page),
                Err(err) => {
                    warn!(target: TARGET_WEB_REQUEST, "Could not fetch article page {}: {:#}", url, err);
                    None
                }
            };

            let mut last_updated = published_from_page(&url, page.as_deref());
            if last_updated.is_none() {
                last_updated = fetch_last_modified(client, &url, PAGE_REQUEST_TIMEOUT).await;
            }

            articles.push(Article {
                title: Some(title),
                url,
                last_updated,
                user: None,
            });
        }

        Ok(articles)
    }
}

/// Collect `(title, absolute URL)` pairs for every anchor with a dated path.
///
/// Anchors with empty visible text are navigation chrome, not headlines.
fn scan_article_links(body: &str, origin: &Url) -> Vec<(String, String)> {
    let document = Html::parse_document(body);
    let anchor_selector = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !has_dated_path(href) {
            continue;
        }

        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let Some(url) = resolve_url(href, origin) else {
            continue;
        };
        links.push((title, url));
    }

    links
}

/// Parse an article page (when we got one) and resolve its publish time.
///
/// Sync on purpose: the parsed document must not live across an await.
fn published_from_page(url: &str, body: Option<&str>) -> Option<String> {
    let document = body.map(Html::parse_document);
    resolve_published(url, document.as_ref())
}
