// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::CommentId,
        events::{DomainEvent, EventPayload},
    },
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Deletes a comment and, for top-level comments, its replies in one
    /// all-or-nothing repository operation. Returns the number of comments
    /// removed. Someone else's comment is a Forbidden, never a NotFound.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<u64> {
        let id = CommentId::new(command.id)?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if !comment.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "comment does not belong to the acting user",
            ));
        }

        let removed = self.write_repo.delete_thread(id).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::CommentDeleted {
                    id,
                    article_id: comment.article_id,
                    removed,
                },
                self.clock.now(),
            ))
            .await?;
        Ok(removed)
    }
}
