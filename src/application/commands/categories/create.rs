// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryName, NewCategory},
        events::{DomainEvent, EventPayload},
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub icon: Option<String>,
}

impl CategoryCommandService {
    /// The pre-check against an existing name is a fast path; two concurrent
    /// creates can both pass it, and the storage layer's uniqueness
    /// constraint resolves the race.
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        if self.categories.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "category name '{name}' is already in use"
            )));
        }

        let now = self.clock.now();
        let created = self
            .categories
            .insert(NewCategory::new(name, command.icon, now))
            .await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::CategoryCreated {
                    id: created.id,
                    name: created.name.as_str().to_string(),
                },
                now,
            ))
            .await?;
        Ok(created.into())
    }
}
