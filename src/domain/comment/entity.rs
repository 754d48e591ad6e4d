// src/domain/comment/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::{EventBuffer, EventSource};
use crate::domain::user::value_objects::UserId;

/// Comment aggregate root. Threading is two levels deep: a comment either has
/// no parent (top-level) or points at a top-level comment (reply). The type
/// system cannot see sibling comments, so the depth rule is enforced by the
/// reply factory, which requires the loaded parent.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Comment {
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CommentId,
        body: CommentBody,
        article_id: ArticleId,
        author_id: UserId,
        parent_id: Option<CommentId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            body,
            article_id,
            author_id,
            parent_id,
            created_at,
            updated_at,
            events: EventBuffer::default(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

impl EventSource for Comment {
    fn event_buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.events
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewComment {
    pub fn top_level(
        body: CommentBody,
        article_id: ArticleId,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            body,
            article_id,
            author_id,
            parent_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reply factory. The parent must be top-level and belong to the same
    /// article; the caller is expected to have loaded it fresh.
    pub fn reply(
        body: CommentBody,
        article_id: ArticleId,
        author_id: UserId,
        parent: &Comment,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if !parent.is_top_level() {
            return Err(DomainError::Validation(
                "replies can only target top-level comments".into(),
            ));
        }
        if parent.article_id != article_id {
            return Err(DomainError::Validation(
                "reply must belong to the same article as its parent".into(),
            ));
        }
        Ok(Self {
            body,
            article_id,
            author_id,
            parent_id: Some(parent.id),
            created_at: now,
            updated_at: now,
        })
    }
}
