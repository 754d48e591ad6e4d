// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        cache::{CacheReader, keys},
        dto::UserProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserId, UserRepository},
};

pub struct UserQueryService {
    users: Arc<dyn UserRepository>,
    cache: CacheReader,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn UserRepository>, cache: CacheReader) -> Self {
        Self { users, cache }
    }

    pub async fn get_profile(&self, id: i64) -> ApplicationResult<UserProfileDto> {
        let id = UserId::new(id)?;
        let key = keys::user_profile(id);
        if let Some(cached) = self.cache.get::<UserProfileDto>(&key).await {
            return Ok(cached);
        }

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let dto = UserProfileDto::from(user);
        self.cache.put(&key, &dto).await;
        Ok(dto)
    }
}
