use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::{NewTag, Tag};
use crate::domain::tag::value_objects::{TagId, TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, tag: &Tag) -> DomainResult<Tag>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;
    async fn exists_by_id(&self, id: TagId) -> DomainResult<bool>;
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
}
