// src/application/events/dispatcher.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::events::subscriber::EventSubscriber;
use crate::application::ports::events::EventPublisher;
use crate::domain::events::DomainEvent;
use async_trait::async_trait;

/// Synchronous, in-process event publisher. Subscribers are an explicit list
/// assembled at startup and invoked in registration order for every event;
/// there is no reflection or annotation scanning behind it.
#[derive(Default)]
pub struct SyncEventDispatcher {
    subscribers: Vec<Arc<dyn EventSubscriber>>,
}

impl SyncEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscribers(subscribers: Vec<Arc<dyn EventSubscriber>>) -> Self {
        Self { subscribers }
    }

    pub fn register(&mut self, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[async_trait]
impl EventPublisher for SyncEventDispatcher {
    async fn publish(&self, event: DomainEvent) -> ApplicationResult<()> {
        for subscriber in &self.subscribers {
            tracing::debug!(
                event = event.payload.event_type(),
                aggregate_id = event.aggregate_id,
                subscriber = subscriber.name(),
                "dispatching domain event"
            );
            subscriber.handle(&event).await?;
        }
        Ok(())
    }
}
