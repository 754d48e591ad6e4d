// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryId, CategoryName},
        events::EventSource,
    },
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub icon: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let new_name = command.name.map(CategoryName::new).transpose()?;
        if let Some(name) = &new_name {
            // renaming to the current name is a no-op, not a conflict
            if *name != category.name {
                if let Some(existing) = self.categories.find_by_name(name).await? {
                    if existing.id != category.id {
                        return Err(ApplicationError::conflict(format!(
                            "category name '{name}' is already in use"
                        )));
                    }
                }
            }
        }

        category.update(new_name, command.icon, self.clock.now());
        let updated = self.categories.update(&category).await?;
        self.publisher.publish_all(category.take_events()).await?;
        Ok(updated.into())
    }
}
