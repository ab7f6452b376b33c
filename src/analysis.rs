//! Post-ranking analysis stage.
//!
//! The pipeline reserves a seam for enriching ranked headlines (impact,
//! sentiment, sector tagging) behind a capability trait. No real analyzer
//! exists yet; the passthrough implementation keeps the stage wired
//! without inventing data.

use async_trait::async_trait;
use tracing::debug;

use crate::sources::Article;
use crate::TARGET_ANALYSIS;

/// Optional enrichment applied to the ranked headline list before it is
/// served.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, articles: Vec<Article>) -> Vec<Article>;
}

/// Analyzer that returns its input untouched.
pub struct PassthroughAnalyzer;

#[async_trait]
impl Analyzer for PassthroughAnalyzer {
    async fn analyze(&self, articles: Vec<Article>) -> Vec<Article> {
        debug!(target: TARGET_ANALYSIS, "Passing {} headlines through unanalyzed", articles.len());
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough_returns_input_unchanged() {
        let articles = vec![Article {
            title: Some("Markets rally".to_string()),
            url: "https://news.example.com/markets".to_string(),
            last_updated: Some("Fri, 15 Mar 2024 10:30:00 +0000".to_string()),
            user: None,
        }];

        let analyzed = PassthroughAnalyzer.analyze(articles.clone()).await;
        assert_eq!(analyzed, articles);
    }
}
