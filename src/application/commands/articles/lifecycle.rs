// src/application/commands/articles/lifecycle.rs
use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};

pub struct PublishArticleCommand {
    pub id: i64,
}

pub struct ArchiveArticleCommand {
    pub id: i64,
}

pub struct RevertArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedUser,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_owned(actor, command.id).await?;
        article.publish(self.clock.now())?;
        self.persist_and_publish(article).await
    }

    pub async fn archive_article(
        &self,
        actor: &AuthenticatedUser,
        command: ArchiveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_owned(actor, command.id).await?;
        article.archive(self.clock.now())?;
        self.persist_and_publish(article).await
    }

    pub async fn revert_article_to_draft(
        &self,
        actor: &AuthenticatedUser,
        command: RevertArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_owned(actor, command.id).await?;
        article.revert_to_draft(self.clock.now())?;
        self.persist_and_publish(article).await
    }
}
