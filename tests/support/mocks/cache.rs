// tests/support/mocks/cache.rs
use std::time::Duration;

use async_trait::async_trait;

use blogcore::application::error::{ApplicationError, ApplicationResult};
use blogcore::application::ports::cache::CacheStore;
use blogcore::infrastructure::InMemoryCache;

/// Cache whose reads and writes work but whose evictions always fail; used
/// to prove invalidation failures never fail the triggering operation.
#[derive(Default)]
pub struct FailingEvictCache {
    inner: InMemoryCache,
}

impl FailingEvictCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for FailingEvictCache {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> ApplicationResult<()> {
        self.inner.put(key, value, ttl).await
    }

    async fn evict(&self, _pattern: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure(
            "cache backend unavailable",
        ))
    }
}
