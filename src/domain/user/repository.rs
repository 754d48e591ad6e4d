use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{GitHubId, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
    async fn update(&self, user: &User) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_github_id(&self, github_id: &GitHubId) -> DomainResult<Option<User>>;
    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool>;
}
