// src/application/commands/articles/update.rs
use super::{ArticleCommandService, ownership::ensure_author};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleContent, ArticleId},
        category::CategoryId,
        events::EventSource,
        tag::TagId,
    },
};

/// Wholesale content replacement: the full bundle is required, not a patch.
pub struct UpdateArticleContentCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub summary: Option<String>,
}

pub struct ChangeArticleCategoryCommand {
    pub id: i64,
    pub category_id: i64,
}

pub struct TagArticleCommand {
    pub id: i64,
    pub tag_id: i64,
}

impl ArticleCommandService {
    pub async fn update_article_content(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleContentCommand,
    ) -> ApplicationResult<ArticleDto> {
        let content = ArticleContent::new(command.title, command.body, command.summary)?;
        let mut article = self.load_owned(actor, command.id).await?;
        article.update_content(content, self.clock.now());
        self.persist_and_publish(article).await
    }

    pub async fn change_article_category(
        &self,
        actor: &AuthenticatedUser,
        command: ChangeArticleCategoryCommand,
    ) -> ApplicationResult<ArticleDto> {
        let category_id = CategoryId::new(command.category_id)?;
        if !self.categories.exists_by_id(category_id).await? {
            return Err(ApplicationError::not_found("category not found"));
        }
        let mut article = self.load_owned(actor, command.id).await?;
        article.update_category(category_id, self.clock.now());
        self.persist_and_publish(article).await
    }

    pub async fn add_article_tag(
        &self,
        actor: &AuthenticatedUser,
        command: TagArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let tag_id = TagId::new(command.tag_id)?;
        let mut article = self.load_owned(actor, command.id).await?;
        article.add_tag(tag_id, self.clock.now());
        self.persist_and_publish(article).await
    }

    pub async fn remove_article_tag(
        &self,
        actor: &AuthenticatedUser,
        command: TagArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let tag_id = TagId::new(command.tag_id)?;
        let mut article = self.load_owned(actor, command.id).await?;
        article.remove_tag(tag_id, self.clock.now());
        self.persist_and_publish(article).await
    }

    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        raw_id: i64,
    ) -> ApplicationResult<Article> {
        let id = ArticleId::new(raw_id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        ensure_author(actor, &article)?;
        Ok(article)
    }

    /// Persist the mutated aggregate, then drain and publish its events. The
    /// buffer is dropped unpublished when the write fails.
    pub(super) async fn persist_and_publish(
        &self,
        mut article: Article,
    ) -> ApplicationResult<ArticleDto> {
        let updated = self.write_repo.update(&article).await?;
        self.publisher.publish_all(article.take_events()).await?;
        Ok(updated.into())
    }
}
