// src/application/commands/tags/delete.rs
use super::TagCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        events::{DomainEvent, EventPayload},
        tag::TagId,
    },
};

pub struct DeleteTagCommand {
    pub id: i64,
}

impl TagCommandService {
    /// Tag deletion is unconditional. The coordinator never touches
    /// article–tag links; the single `tag.deleted` event it raises obliges a
    /// subscribed handler to drop them within the same operation.
    pub async fn delete_tag(&self, command: DeleteTagCommand) -> ApplicationResult<()> {
        let id = TagId::new(command.id)?;
        if !self.tags.exists_by_id(id).await? {
            return Err(ApplicationError::not_found("tag not found"));
        }

        self.tags.delete(id).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::TagDeleted { id },
                self.clock.now(),
            ))
            .await?;
        Ok(())
    }
}
