//! Syndication feed sources.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::client::fetch_text;
use super::parser::parse_feed;
use super::types::{Article, REQUEST_TIMEOUT};
use super::NewsSource;
use crate::TARGET_WEB_REQUEST;

/// A source backed by an RSS or Atom feed.
pub struct SyndicationSource {
    name: String,
    origin: Url,
    feed_url: String,
}

impl SyndicationSource {
    pub fn new(name: &str, origin: &str, feed_url: &str) -> Self {
        Self {
            name: name.to_string(),
            origin: Url::parse(origin).expect("source origin must be an absolute URL"),
            feed_url: feed_url.to_string(),
        }
    }
}

#[async_trait]
impl NewsSource for SyndicationSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> &Url {
        &self.origin
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<Article>> {
        debug!(target: TARGET_WEB_REQUEST, "Loading feed for {} from {}", self.name, self.feed_url);

        let body = fetch_text(client, &self.feed_url, REQUEST_TIMEOUT)
            .await
            .with_context(|| format!("Failed to retrieve feed {}", self.feed_url))?;

        let articles = parse_feed(&body, &self.origin)
            .with_context(|| format!("Failed to parse feed {}", self.feed_url))?;

        debug!(target: TARGET_WEB_REQUEST, "Parsed {} entries from {}", articles.len(), self.feed_url);
        Ok(articles)
    }
}
