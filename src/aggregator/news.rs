use super::AggregateError;
use crate::cache::{build_key, Lookup, TtlCache};
use crate::upstream::newsapi::NewsApiClient;
use crate::upstream::types::RawArticle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Headlines move slowly enough that entries live for an hour.
const NEWS_TTL: Duration = Duration::from_secs(3600);

/// Only the top of the feed is kept, in provider order.
const MAX_ARTICLES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsDigest {
    pub news: Vec<Article>,
    pub cache_status: bool,
}

pub struct NewsAggregator {
    upstream: Arc<NewsApiClient>,
    cache: TtlCache<NewsDigest>,
}

impl NewsAggregator {
    pub fn new(upstream: Arc<NewsApiClient>) -> Self {
        Self {
            upstream,
            cache: TtlCache::new(NEWS_TTL),
        }
    }

    /// Fetches the top headlines for a category.
    ///
    /// Categories are expected lowercase by convention but are lowercased
    /// again for the key. The stored copy always has `cache_status = false`.
    pub async fn get_news(&self, category: &str) -> Result<NewsDigest, AggregateError> {
        let key = build_key("news", category);

        if let Lookup::Hit(mut digest) = self.cache.lookup(&key).await {
            tracing::debug!(key = %key, "news cache hit");
            digest.cache_status = true;
            return Ok(digest);
        }
        tracing::debug!(key = %key, "news cache miss, calling upstream");

        let headlines = self.upstream.top_headlines(category).await?;

        let news = headlines
            .articles
            .into_iter()
            .take(MAX_ARTICLES)
            .map(normalize_article)
            .collect::<Result<Vec<_>, _>>()?;

        let digest = NewsDigest {
            news,
            cache_status: false,
        };

        self.cache.store(key, digest.clone()).await;
        Ok(digest)
    }
}

/// An article missing its title, source name, or link fails the whole call;
/// partial articles are never returned.
fn normalize_article(raw: RawArticle) -> Result<Article, AggregateError> {
    let title = raw
        .title
        .ok_or_else(|| AggregateError::MalformedUpstreamPayload("title".to_string()))?;
    let source = raw
        .source
        .and_then(|s| s.name)
        .ok_or_else(|| AggregateError::MalformedUpstreamPayload("source.name".to_string()))?;
    let url = raw
        .url
        .ok_or_else(|| AggregateError::MalformedUpstreamPayload("url".to_string()))?;

    Ok(Article { title, source, url })
}
