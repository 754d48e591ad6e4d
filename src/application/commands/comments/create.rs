// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleStatus},
        comment::{CommentBody, CommentId, NewComment},
        events::{DomainEvent, EventPayload},
    },
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub body: String,
    /// Present for replies; the parent must be a top-level comment on the
    /// same article.
    pub parent_id: Option<i64>,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let body = CommentBody::new(command.body)?;

        let article = self
            .articles
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        // commenting is tied to visibility: drafts and archived articles
        // accept no new comments or replies
        if article.status != ArticleStatus::Published {
            return Err(ApplicationError::state_conflict(
                "comments are only accepted on published articles",
            ));
        }

        let now = self.clock.now();
        let new_comment = match command.parent_id {
            None => NewComment::top_level(body, article_id, actor.id, now),
            Some(raw) => {
                let parent_id = CommentId::new(raw)?;
                let parent = self
                    .read_repo
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;
                NewComment::reply(body, article_id, actor.id, &parent, now)?
            }
        };

        let created = self.write_repo.insert(new_comment).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::CommentCreated {
                    id: created.id,
                    article_id,
                    parent_id: created.parent_id,
                },
                now,
            ))
            .await?;
        Ok(created.into())
    }
}
