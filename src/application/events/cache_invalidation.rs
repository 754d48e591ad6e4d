// src/application/events/cache_invalidation.rs
use std::sync::Arc;

use crate::application::cache::policy;
use crate::application::error::ApplicationResult;
use crate::application::events::subscriber::EventSubscriber;
use crate::application::ports::cache::CacheStore;
use crate::domain::events::DomainEvent;
use async_trait::async_trait;

/// Applies the static invalidation table to the cache port. Eviction failures
/// are logged and swallowed: a stale entry expires at its TTL, while a failed
/// operation must not.
pub struct CacheInvalidationSubscriber {
    cache: Arc<dyn CacheStore>,
}

impl CacheInvalidationSubscriber {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl EventSubscriber for CacheInvalidationSubscriber {
    fn name(&self) -> &'static str {
        "cache-invalidation"
    }

    async fn handle(&self, event: &DomainEvent) -> ApplicationResult<()> {
        for pattern in policy::invalidation_targets(&event.payload) {
            if let Err(err) = self.cache.evict(&pattern).await {
                tracing::warn!(
                    event = event.payload.event_type(),
                    pattern,
                    error = %err,
                    "cache eviction failed"
                );
            }
        }
        Ok(())
    }
}
