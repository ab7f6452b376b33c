//! Headline acquisition.
//!
//! Each configured source fetches and normalizes its own headlines behind
//! the [`NewsSource`] trait; `fetch_all` merges them with best-effort
//! semantics, so a broken source contributes nothing and never takes down
//! the aggregate pass.

mod client;
mod dates;
mod feed;
mod homepage;
mod parser;
mod types;

pub use self::client::create_http_client;
pub use self::dates::{parse_date, resolve_published};
pub use self::feed::SyndicationSource;
pub use self::homepage::HomepageSource;
pub use self::parser::{parse_feed, resolve_url};
pub use self::types::*;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{error, info};
use url::Url;

use crate::TARGET_WEB_REQUEST;

/// A configured headline source: a display name, the origin that relative
/// links are resolved against, and a fetch strategy.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    /// Base origin for resolving relative links from this source.
    fn origin(&self) -> &Url;

    /// Fetch and normalize the source's current headlines.
    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<Article>>;
}

/// The fixed set of configured sources.
pub fn sources() -> Vec<Box<dyn NewsSource>> {
    vec![
        Box::new(SyndicationSource::new(
            "CNBC India",
            "https://www.cnbc.com/",
            "https://www.cnbc.com/id/20910258/device/rss/rss.html",
        )),
        Box::new(SyndicationSource::new(
            "CNBC World",
            "https://www.cnbc.com/",
            "https://www.cnbc.com/id/100727362/device/rss/rss.html",
        )),
    ]
}

/// Fetch every configured source in turn and merge the results.
///
/// Sources are polled sequentially within the request. A source that fails
/// is logged and contributes zero records. Duplicate URLs keep their first
/// occurrence.
pub async fn fetch_all(
    client: &reqwest::Client,
    sources: &[Box<dyn NewsSource>],
) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for source in sources {
        match source.fetch(client).await {
            Ok(articles) => {
                info!(target: TARGET_WEB_REQUEST, "Fetched {} headlines from {}", articles.len(), source.name());
                for article in articles {
                    if seen.insert(article.url.clone()) {
                        merged.push(article);
                    }
                }
            }
            Err(err) => {
                error!(target: TARGET_WEB_REQUEST, "Failed to fetch headlines from {}: {:#}", source.name(), err);
            }
        }
    }

    merged
}
