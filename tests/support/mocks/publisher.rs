// tests/support/mocks/publisher.rs
use std::sync::Mutex;

use async_trait::async_trait;

use blogcore::application::error::ApplicationResult;
use blogcore::application::events::subscriber::EventSubscriber;
use blogcore::application::ports::events::EventPublisher;
use blogcore::domain::events::DomainEvent;

/// Publisher that swallows events into a list for assertions.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: DomainEvent) -> ApplicationResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Subscriber that records every dispatched event; registered first so tests
/// can observe the stream while the real cascade subscribers still run.
#[derive(Default)]
pub struct RecordingSubscriber {
    events: Mutex<Vec<DomainEvent>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventSubscriber for RecordingSubscriber {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn handle(&self, event: &DomainEvent) -> ApplicationResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
