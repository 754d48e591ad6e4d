// src/application/ports/cache.rs
use std::time::Duration;

use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Best-effort, evictable key/value store. Correctness never depends on it:
/// a missing or failing cache degrades to the authoritative read path.
///
/// Keys are plain strings. `evict` accepts either an exact key or a prefix
/// pattern with a trailing `*` (e.g. `articles:list:*`).
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;
    async fn put(&self, key: &str, value: String, ttl: Duration) -> ApplicationResult<()>;
    async fn evict(&self, pattern: &str) -> ApplicationResult<()>;
}
