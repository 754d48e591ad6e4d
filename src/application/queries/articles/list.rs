// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        cache::keys,
        dto::{ArticleDto, Page, PageRequest},
        error::ApplicationResult,
    },
    domain::article::ArticleStatus,
};

pub struct ListArticlesQuery {
    pub status: Option<ArticleStatus>,
    pub page: PageRequest,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let page = query
            .page
            .normalize(self.default_page_size, self.max_page_size);
        let key = keys::article_list(query.status, page.page, page.per_page);
        if let Some(cached) = self.list_cache.get::<Page<ArticleDto>>(&key).await {
            return Ok(cached);
        }

        let (records, total) = self
            .read_repo
            .list_page(query.status, page.per_page, page.offset())
            .await?;
        let items = records.into_iter().map(Into::into).collect();
        let result = Page::new(items, page, total);
        self.list_cache.put(&key, &result).await;
        Ok(result)
    }
}
