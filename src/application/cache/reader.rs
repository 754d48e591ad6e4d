// src/application/cache/reader.rs
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::cache::CacheStore;

/// Read-through helper shared by the query services. Cache failures are
/// logged and treated as misses; the authoritative read path always wins.
#[derive(Clone)]
pub struct CacheReader {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl CacheReader {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(key, error = %err, "discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "cache read failed, falling through");
                None
            }
        }
    }

    pub async fn put<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to serialize cache entry");
                return;
            }
        };
        if let Err(err) = self.store.put(key, raw, self.ttl).await {
            tracing::warn!(key, error = %err, "cache write failed");
        }
    }
}
