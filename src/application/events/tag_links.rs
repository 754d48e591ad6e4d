// src/application/events/tag_links.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::events::subscriber::EventSubscriber;
use crate::domain::article::ArticleWriteRepository;
use crate::domain::events::{DomainEvent, EventPayload};
use async_trait::async_trait;

/// Cascade handler for tag deletion: the coordinator that deletes a tag never
/// touches article–tag links itself; this subscriber removes them when the
/// `tag.deleted` event arrives.
pub struct TagLinkCascadeSubscriber {
    articles: Arc<dyn ArticleWriteRepository>,
}

impl TagLinkCascadeSubscriber {
    pub fn new(articles: Arc<dyn ArticleWriteRepository>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl EventSubscriber for TagLinkCascadeSubscriber {
    fn name(&self) -> &'static str {
        "tag-link-cascade"
    }

    async fn handle(&self, event: &DomainEvent) -> ApplicationResult<()> {
        if let EventPayload::TagDeleted { id } = event.payload {
            let removed = self.articles.remove_tag_from_all(id).await?;
            tracing::debug!(tag_id = %id, removed, "removed article-tag links");
        }
        Ok(())
    }
}
