// src/infrastructure/cache.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::application::ApplicationResult;
use crate::application::ports::cache::CacheStore;
use async_trait::async_trait;

/// The degenerate cache: every read misses, writes and evictions are no-ops.
/// Deployments without a cache backend plug this in and keep full
/// correctness from the authoritative read path.
#[derive(Default)]
pub struct NullCache;

#[async_trait]
impl CacheStore for NullCache {
    async fn get(&self, _key: &str) -> ApplicationResult<Option<String>> {
        Ok(None)
    }

    async fn put(&self, _key: &str, _value: String, _ttl: Duration) -> ApplicationResult<()> {
        Ok(())
    }

    async fn evict(&self, _pattern: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

/// Process-local cache for single-node deployments and tests. Entries expire
/// at their TTL; explicit eviction wins over expiry.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> ApplicationResult<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), (value, Instant::now() + ttl));
        Ok(())
    }

    async fn evict(&self, pattern: &str) -> ApplicationResult<()> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(prefix) = pattern.strip_suffix('*') {
            entries.retain(|key, _| !key.starts_with(prefix));
        } else {
            entries.remove(pattern);
        }
        Ok(())
    }
}
