// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{
        cache::keys,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let key = keys::article_detail(id);
        if let Some(cached) = self.detail_cache.get::<ArticleDto>(&key).await {
            return Ok(cached);
        }

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let dto = ArticleDto::from(article);
        self.detail_cache.put(&key, &dto).await;
        Ok(dto)
    }
}
