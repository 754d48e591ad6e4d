// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::ApplicationResult,
    },
    domain::events::{DomainEvent, EventPayload},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_owned(actor, command.id).await?;
        self.write_repo.delete(article.id).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::ArticleDeleted { id: article.id },
                self.clock.now(),
            ))
            .await?;
        Ok(())
    }
}
