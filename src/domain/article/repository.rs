use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::value_objects::TagId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Removes every article–tag association referencing `tag_id`, returning
    /// the number of links dropped. Invoked by the tag-deletion cascade
    /// subscriber, never by the tag coordinator itself.
    async fn remove_tag_from_all(&self, tag_id: TagId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool>;
    /// Count of articles currently referencing the category; evaluated in the
    /// same unit of work as the deletion decision it guards.
    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64>;
    /// Returns one page of articles plus the total row count for the filter.
    async fn list_page(
        &self,
        status: Option<ArticleStatus>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Article>, u64)>;
}
