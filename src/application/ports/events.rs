// src/application/ports/events.rs
use crate::application::error::ApplicationResult;
use crate::domain::events::DomainEvent;
use async_trait::async_trait;

/// Outbound channel for domain events. Callers only publish after the
/// triggering operation's persistence step has succeeded; delivery order
/// follows publish order within one operation.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: DomainEvent) -> ApplicationResult<()>;

    async fn publish_all(&self, events: Vec<DomainEvent>) -> ApplicationResult<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
