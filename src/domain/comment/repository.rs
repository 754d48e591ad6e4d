use std::collections::HashMap;

use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Deletes the comment and, when it is top-level, every direct reply, as
    /// one all-or-nothing unit. Returns the number of rows removed.
    async fn delete_thread(&self, id: CommentId) -> DomainResult<u64>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    /// One page of top-level comments for an article plus the total count of
    /// top-level rows.
    async fn list_top_level(
        &self,
        article_id: ArticleId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Comment>, u64)>;
    /// Reply counts keyed by parent id, resolved in one batched lookup.
    /// Implementations may omit parents with zero replies; callers backfill.
    async fn count_replies(
        &self,
        parent_ids: &[CommentId],
    ) -> DomainResult<HashMap<CommentId, u64>>;
    /// Most recent replies per parent, newest first, at most `per_parent`
    /// each, resolved in one batched lookup.
    async fn find_latest_replies(
        &self,
        parent_ids: &[CommentId],
        per_parent: u32,
    ) -> DomainResult<HashMap<CommentId, Vec<Comment>>>;
}
