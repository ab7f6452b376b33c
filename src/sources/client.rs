//! HTTP client creation and request helpers shared by all sources.

use anyhow::{Context, Result};
use reqwest::{cookie::Jar, header};
use std::sync::Arc;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::TARGET_WEB_REQUEST;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/xml, text/xml, text/html, */*;q=0.9";

/// Create the shared HTTP client used for feed and page requests.
pub fn create_http_client() -> Result<reqwest::Client> {
    let cookie_store = Jar::default();
    reqwest::Client::builder()
        .cookie_store(true)
        .cookie_provider(Arc::new(cookie_store))
        .gzip(true)
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .context("Failed to build HTTP client")
}

/// GET a URL and return the response body, bounded by `deadline`.
pub async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    deadline: Duration,
) -> Result<String> {
    debug!(target: TARGET_WEB_REQUEST, "Requesting {}", url);

    let response = timeout(
        deadline,
        client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT)
            .send(),
    )
    .await
    .with_context(|| format!("Request to {} timed out", url))?
    .with_context(|| format!("Request to {} failed", url))?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error {} from {}", response.status(), url);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}

/// HEAD a URL and return its `Last-Modified` header, falling back to `Date`.
///
/// Best-effort only: any failure yields `None`.
pub async fn fetch_last_modified(
    client: &reqwest::Client,
    url: &str,
    deadline: Duration,
) -> Option<String> {
    let response = timeout(
        deadline,
        client
            .head(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send(),
    )
    .await
    .ok()?
    .ok()?;

    if !response.status().is_success() {
        return None;
    }

    let headers = response.headers();
    headers
        .get(header::LAST_MODIFIED)
        .or_else(|| headers.get(header::DATE))
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
