// src/domain/article/entity.rs
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleStatus};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::{EventBuffer, EventPayload, EventSource};
use crate::domain::tag::value_objects::TagId;
use crate::domain::user::value_objects::AuthorId;

/// Article aggregate root. Cross-aggregate references are ids only; the
/// category and tag aggregates are loaded and persisted independently.
///
/// Invariant: `published_at` is `Some` if and only if `status` is `Published`.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub category_id: Option<CategoryId>,
    pub author_id: AuthorId,
    pub tag_ids: HashSet<TagId>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Article {
    /// Rebuild an article from persisted fields. The repository implementation
    /// is the only expected caller; the status/timestamp invariant is
    /// re-checked so a corrupted row cannot materialize as a live aggregate.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ArticleId,
        content: ArticleContent,
        status: ArticleStatus,
        category_id: Option<CategoryId>,
        author_id: AuthorId,
        tag_ids: HashSet<TagId>,
        published_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if published_at.is_some() != (status == ArticleStatus::Published) {
            return Err(DomainError::Validation(
                "publication timestamp must be set exactly when status is published".into(),
            ));
        }
        Ok(Self {
            id,
            content,
            status,
            category_id,
            author_id,
            tag_ids,
            published_at,
            created_at,
            updated_at,
            events: EventBuffer::default(),
        })
    }

    /// Draft → Published.
    pub fn publish(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != ArticleStatus::Draft {
            return Err(DomainError::StateConflict(format!(
                "cannot publish a {} article",
                self.status
            )));
        }
        self.status = ArticleStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
        self.events
            .record(EventPayload::ArticlePublished { id: self.id }, now);
        Ok(())
    }

    /// Published → Archived. The publication timestamp is kept.
    pub fn archive(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status != ArticleStatus::Published {
            return Err(DomainError::StateConflict(format!(
                "cannot archive a {} article",
                self.status
            )));
        }
        self.status = ArticleStatus::Archived;
        self.updated_at = now;
        self.events
            .record(EventPayload::ArticleArchived { id: self.id }, now);
        Ok(())
    }

    /// Published/Archived → Draft. Clears the publication timestamp.
    pub fn revert_to_draft(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.status == ArticleStatus::Draft {
            return Err(DomainError::StateConflict(
                "article is already a draft".into(),
            ));
        }
        self.status = ArticleStatus::Draft;
        self.published_at = None;
        self.updated_at = now;
        self.events
            .record(EventPayload::ArticleRevertedToDraft { id: self.id }, now);
        Ok(())
    }

    /// Wholesale content replacement; legal in any status.
    pub fn update_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
        self.events
            .record(EventPayload::ArticleContentUpdated { id: self.id }, now);
    }

    pub fn update_category(&mut self, category_id: CategoryId, now: DateTime<Utc>) {
        let previous = self.category_id.replace(category_id);
        if previous == Some(category_id) {
            return;
        }
        self.updated_at = now;
        self.events.record(
            EventPayload::ArticleCategoryChanged {
                id: self.id,
                previous,
                current: category_id,
            },
            now,
        );
    }

    /// Idempotent; records an event only when the set actually changes.
    pub fn add_tag(&mut self, tag_id: TagId, now: DateTime<Utc>) {
        if self.tag_ids.insert(tag_id) {
            self.updated_at = now;
            self.events.record(
                EventPayload::ArticleTagAdded {
                    id: self.id,
                    tag_id,
                },
                now,
            );
        }
    }

    /// Idempotent; records an event only when the set actually changes.
    pub fn remove_tag(&mut self, tag_id: TagId, now: DateTime<Utc>) {
        if self.tag_ids.remove(&tag_id) {
            self.updated_at = now;
            self.events.record(
                EventPayload::ArticleTagRemoved {
                    id: self.id,
                    tag_id,
                },
                now,
            );
        }
    }
}

impl EventSource for Article {
    fn event_buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.events
    }
}

/// Article awaiting its store-assigned identity.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub category_id: Option<CategoryId>,
    pub author_id: AuthorId,
    pub tag_ids: HashSet<TagId>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// Factory for the only legal starting state: a draft with content,
    /// category and author.
    pub fn draft(
        content: ArticleContent,
        category_id: CategoryId,
        author_id: AuthorId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            content,
            status: ArticleStatus::Draft,
            category_id: Some(category_id),
            author_id,
            tag_ids: HashSet::new(),
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags(mut self, tag_ids: HashSet<TagId>) -> Self {
        self.tag_ids = tag_ids;
        self
    }
}
