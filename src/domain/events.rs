// src/domain/events.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::article::value_objects::ArticleId;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::comment::value_objects::CommentId;
use crate::domain::tag::value_objects::TagId;
use crate::domain::user::value_objects::{AuthorId, UserId};

/// Typed payload of a domain event. Variants carry just enough state for a
/// subscriber to decide what to cascade or invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    ArticleCreated {
        id: ArticleId,
        author_id: AuthorId,
    },
    ArticleContentUpdated {
        id: ArticleId,
    },
    ArticleCategoryChanged {
        id: ArticleId,
        previous: Option<CategoryId>,
        current: CategoryId,
    },
    ArticleTagAdded {
        id: ArticleId,
        tag_id: TagId,
    },
    ArticleTagRemoved {
        id: ArticleId,
        tag_id: TagId,
    },
    ArticlePublished {
        id: ArticleId,
    },
    ArticleArchived {
        id: ArticleId,
    },
    ArticleRevertedToDraft {
        id: ArticleId,
    },
    ArticleDeleted {
        id: ArticleId,
    },
    CategoryCreated {
        id: CategoryId,
        name: String,
    },
    CategoryUpdated {
        id: CategoryId,
        old_name: String,
        new_name: String,
    },
    CategoryDeleted {
        id: CategoryId,
    },
    TagCreated {
        id: TagId,
        name: String,
    },
    TagUpdated {
        id: TagId,
        old_name: String,
        new_name: String,
    },
    TagDeleted {
        id: TagId,
    },
    CommentCreated {
        id: CommentId,
        article_id: ArticleId,
        parent_id: Option<CommentId>,
    },
    CommentDeleted {
        id: CommentId,
        article_id: ArticleId,
        removed: u64,
    },
    UserProfileUpdated {
        id: UserId,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ArticleCreated { .. } => "article.created",
            Self::ArticleContentUpdated { .. } => "article.content_updated",
            Self::ArticleCategoryChanged { .. } => "article.category_changed",
            Self::ArticleTagAdded { .. } => "article.tag_added",
            Self::ArticleTagRemoved { .. } => "article.tag_removed",
            Self::ArticlePublished { .. } => "article.published",
            Self::ArticleArchived { .. } => "article.archived",
            Self::ArticleRevertedToDraft { .. } => "article.reverted_to_draft",
            Self::ArticleDeleted { .. } => "article.deleted",
            Self::CategoryCreated { .. } => "category.created",
            Self::CategoryUpdated { .. } => "category.updated",
            Self::CategoryDeleted { .. } => "category.deleted",
            Self::TagCreated { .. } => "tag.created",
            Self::TagUpdated { .. } => "tag.updated",
            Self::TagDeleted { .. } => "tag.deleted",
            Self::CommentCreated { .. } => "comment.created",
            Self::CommentDeleted { .. } => "comment.deleted",
            Self::UserProfileUpdated { .. } => "user.profile_updated",
        }
    }

    /// Scalar id of the aggregate the event originated from.
    pub fn aggregate_id(&self) -> i64 {
        match self {
            Self::ArticleCreated { id, .. }
            | Self::ArticleContentUpdated { id }
            | Self::ArticleCategoryChanged { id, .. }
            | Self::ArticleTagAdded { id, .. }
            | Self::ArticleTagRemoved { id, .. }
            | Self::ArticlePublished { id }
            | Self::ArticleArchived { id }
            | Self::ArticleRevertedToDraft { id }
            | Self::ArticleDeleted { id } => i64::from(*id),
            Self::CategoryCreated { id, .. }
            | Self::CategoryUpdated { id, .. }
            | Self::CategoryDeleted { id } => i64::from(*id),
            Self::TagCreated { id, .. }
            | Self::TagUpdated { id, .. }
            | Self::TagDeleted { id } => i64::from(*id),
            Self::CommentCreated { id, .. } | Self::CommentDeleted { id, .. } => i64::from(*id),
            Self::UserProfileUpdated { id } => i64::from(*id),
        }
    }
}

/// Immutable envelope around a single [`EventPayload`].
#[derive(Debug, Clone)]
pub struct DomainEvent {
    pub id: Uuid,
    pub aggregate_id: i64,
    pub occurred_at: DateTime<Utc>,
    pub payload: EventPayload,
}

impl DomainEvent {
    pub fn new(payload: EventPayload, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            aggregate_id: payload.aggregate_id(),
            occurred_at,
            payload,
        }
    }
}

/// Per-aggregate, append-only buffer of pending events. Drained exactly once
/// by the orchestrating command after the persistence call succeeds; dropped
/// unpublished when persistence fails.
#[derive(Debug, Clone, Default)]
pub struct EventBuffer {
    pending: Vec<DomainEvent>,
}

impl EventBuffer {
    pub fn record(&mut self, payload: EventPayload, at: DateTime<Utc>) {
        self.pending.push(DomainEvent::new(payload, at));
    }

    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Capability shared by every aggregate root: each embeds an [`EventBuffer`]
/// rather than inheriting from a common base.
pub trait EventSource {
    fn event_buffer_mut(&mut self) -> &mut EventBuffer;

    fn take_events(&mut self) -> Vec<DomainEvent> {
        self.event_buffer_mut().drain()
    }
}
