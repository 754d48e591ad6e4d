// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        category::CategoryId,
        events::{DomainEvent, EventPayload},
    },
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Deletion is refused while any article still references the category;
    /// the reference count travels with the error so the caller can surface
    /// what blocks the delete.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        if !self.categories.exists_by_id(id).await? {
            return Err(ApplicationError::not_found("category not found"));
        }

        let blockers = self.articles.count_by_category(id).await?;
        if blockers > 0 {
            return Err(ApplicationError::referential_conflict(
                "category is referenced by existing articles",
                blockers,
            ));
        }

        self.categories.delete(id).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::CategoryDeleted { id },
                self.clock.now(),
            ))
            .await?;
        Ok(())
    }
}
