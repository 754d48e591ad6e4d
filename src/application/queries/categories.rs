// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        cache::{CacheReader, keys},
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryRepository},
};

pub struct CategoryQueryService {
    categories: Arc<dyn CategoryRepository>,
    cache: CacheReader,
}

impl CategoryQueryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, cache: CacheReader) -> Self {
        Self { categories, cache }
    }

    pub async fn get_category(&self, id: i64) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(id)?;
        let key = keys::category_detail(id);
        if let Some(cached) = self.cache.get::<CategoryDto>(&key).await {
            return Ok(cached);
        }

        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        let dto = CategoryDto::from(category);
        self.cache.put(&key, &dto).await;
        Ok(dto)
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        if let Some(cached) = self.cache.get::<Vec<CategoryDto>>(keys::CATEGORIES_ALL).await {
            return Ok(cached);
        }

        let categories = self.categories.list_all().await?;
        let dtos: Vec<CategoryDto> = categories.into_iter().map(Into::into).collect();
        self.cache.put(keys::CATEGORIES_ALL, &dtos).await;
        Ok(dtos)
    }
}
