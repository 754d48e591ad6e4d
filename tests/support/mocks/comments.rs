// tests/support/mocks/comments.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use blogcore::domain::article::value_objects::ArticleId;
use blogcore::domain::comment::entity::{Comment, NewComment};
use blogcore::domain::comment::repository::{CommentReadRepository, CommentWriteRepository};
use blogcore::domain::comment::value_objects::CommentId;
use blogcore::domain::errors::{DomainError, DomainResult};

pub struct InMemoryCommentRepo {
    rows: Mutex<HashMap<i64, Comment>>,
    next_id: AtomicI64,
}

impl InMemoryCommentRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl Default for InMemoryCommentRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = CommentId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Comment::restore(
            id,
            comment.body,
            comment.article_id,
            comment.author_id,
            comment.parent_id,
            comment.created_at,
            comment.updated_at,
        );
        let mut rows = self.rows.lock().unwrap();
        rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn delete_thread(&self, id: CommentId) -> DomainResult<u64> {
        // single lock guard for the whole cascade keeps it all-or-nothing
        let mut rows = self.rows.lock().unwrap();
        if rows.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        let mut removed = 1;
        rows.retain(|_, comment| {
            if comment.parent_id == Some(id) {
                removed += 1;
                false
            } else {
                true
            }
        });
        Ok(removed)
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryCommentRepo {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn list_top_level(
        &self,
        article_id: ArticleId,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Comment> = rows
            .values()
            .filter(|comment| comment.article_id == article_id && comment.is_top_level())
            .cloned()
            .collect();
        matching.sort_by_key(|comment| i64::from(comment.id));
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn count_replies(
        &self,
        parent_ids: &[CommentId],
    ) -> DomainResult<HashMap<CommentId, u64>> {
        let rows = self.rows.lock().unwrap();
        // like a GROUP BY: parents without replies do not appear at all
        let mut counts = HashMap::new();
        for parent_id in parent_ids {
            let count = rows
                .values()
                .filter(|comment| comment.parent_id == Some(*parent_id))
                .count() as u64;
            if count > 0 {
                counts.insert(*parent_id, count);
            }
        }
        Ok(counts)
    }

    async fn find_latest_replies(
        &self,
        parent_ids: &[CommentId],
        per_parent: u32,
    ) -> DomainResult<HashMap<CommentId, Vec<Comment>>> {
        let rows = self.rows.lock().unwrap();
        let mut result = HashMap::new();
        for parent_id in parent_ids {
            let mut replies: Vec<Comment> = rows
                .values()
                .filter(|comment| comment.parent_id == Some(*parent_id))
                .cloned()
                .collect();
            replies.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then(i64::from(b.id).cmp(&i64::from(a.id)))
            });
            replies.truncate(per_parent as usize);
            if !replies.is_empty() {
                result.insert(*parent_id, replies);
            }
        }
        Ok(result)
    }
}
