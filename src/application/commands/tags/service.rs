// src/application/commands/tags/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, time::Clock},
    domain::tag::TagRepository,
};

pub struct TagCommandService {
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) publisher: Arc<dyn EventPublisher>,
}

impl TagCommandService {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            tags,
            clock,
            publisher,
        }
    }
}
