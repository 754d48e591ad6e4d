// src/application/queries/tags.rs
use std::sync::Arc;

use crate::{
    application::{
        cache::{CacheReader, keys},
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::tag::{TagId, TagRepository},
};

pub struct TagQueryService {
    tags: Arc<dyn TagRepository>,
    cache: CacheReader,
}

impl TagQueryService {
    pub fn new(tags: Arc<dyn TagRepository>, cache: CacheReader) -> Self {
        Self { tags, cache }
    }

    pub async fn get_tag(&self, id: i64) -> ApplicationResult<TagDto> {
        let id = TagId::new(id)?;
        let key = keys::tag_detail(id);
        if let Some(cached) = self.cache.get::<TagDto>(&key).await {
            return Ok(cached);
        }

        let tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;
        let dto = TagDto::from(tag);
        self.cache.put(&key, &dto).await;
        Ok(dto)
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        if let Some(cached) = self.cache.get::<Vec<TagDto>>(keys::TAGS_ALL).await {
            return Ok(cached);
        }

        let tags = self.tags.list_all().await?;
        let dtos: Vec<TagDto> = tags.into_iter().map(Into::into).collect();
        self.cache.put(keys::TAGS_ALL, &dtos).await;
        Ok(dtos)
    }
}
