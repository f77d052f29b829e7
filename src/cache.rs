use moka::future::Cache;
use std::time::Duration;

/// Derives the cache key for a namespaced query. The identifier is
/// lowercased so case variants of the same city or category share one
/// entry; no other normalization is applied.
pub fn build_key(namespace: &str, identifier: &str) -> String {
    format!("{}_{}", namespace, identifier.to_lowercase())
}

/// Outcome of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Hit(T),
    Miss,
}

/// Shared TTL cache over normalized results. Expiry is moka's time-based
/// eviction; entries are never deleted explicitly and writes on miss are
/// last-writer-wins.
#[derive(Clone)]
pub struct TtlCache<T: Clone + Send + Sync + 'static> {
    inner: Cache<String, T>,
}

impl<T: Clone + Send + Sync + 'static> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(1000)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn lookup(&self, key: &str) -> Lookup<T> {
        match self.inner.get(key).await {
            Some(value) => Lookup::Hit(value),
            None => Lookup::Miss,
        }
    }

    pub async fn store(&self, key: String, value: T) {
        self.inner.insert(key, value).await;
    }

    #[cfg(test)]
    pub async fn contains(&self, key: &str) -> bool {
        self.inner.get(key).await.is_some()
    }
}
