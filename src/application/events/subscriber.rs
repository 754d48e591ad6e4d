// src/application/events/subscriber.rs
use crate::application::error::ApplicationResult;
use crate::domain::events::DomainEvent;
use async_trait::async_trait;

/// In-process handler for published domain events. Subscribers run
/// synchronously inside the operation that raised the event, after its
/// persistence step committed.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle(&self, event: &DomainEvent) -> ApplicationResult<()>;
}
