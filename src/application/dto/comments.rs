use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            parent_id: comment.parent_id.map(i64::from),
            body: comment.body.into(),
            created_at: comment.created_at,
        }
    }
}

/// One top-level comment with its aggregated reply data: the full count plus
/// a bounded window of the newest replies. `reply_count` may exceed
/// `latest_replies.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThreadDto {
    pub comment: CommentDto,
    pub reply_count: u64,
    pub latest_replies: Vec<CommentDto>,
}
