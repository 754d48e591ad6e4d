// src/application/commands/articles/create.rs
use std::collections::HashSet;

use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, NewArticle},
        category::CategoryId,
        events::{DomainEvent, EventPayload},
        tag::TagId,
        user::AuthorId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub summary: Option<String>,
    pub category_id: i64,
    pub tag_ids: Vec<i64>,
}

impl ArticleCommandService {
    /// New articles always start life as drafts owned by the acting user.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let content = ArticleContent::new(command.title, command.body, command.summary)?;
        let category_id = CategoryId::new(command.category_id)?;
        if !self.categories.exists_by_id(category_id).await? {
            return Err(ApplicationError::not_found("category not found"));
        }

        let mut tag_ids = HashSet::new();
        for raw in command.tag_ids {
            tag_ids.insert(TagId::new(raw)?);
        }

        let now = self.clock.now();
        let new_article = NewArticle::draft(content, category_id, AuthorId::from(actor.id), now)
            .with_tags(tag_ids);

        let created = self.write_repo.insert(new_article).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::ArticleCreated {
                    id: created.id,
                    author_id: created.author_id,
                },
                now,
            ))
            .await?;
        Ok(created.into())
    }
}
