// src/application/commands/tags/update.rs
use super::TagCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        events::EventSource,
        tag::{TagId, TagName},
    },
};

pub struct UpdateTagCommand {
    pub id: i64,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl TagCommandService {
    pub async fn update_tag(&self, command: UpdateTagCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let mut tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let new_name = command.name.map(TagName::new).transpose()?;
        if let Some(name) = &new_name {
            if *name != tag.name {
                if let Some(existing) = self.tags.find_by_name(name).await? {
                    if existing.id != tag.id {
                        return Err(ApplicationError::conflict(format!(
                            "tag name '{name}' is already in use"
                        )));
                    }
                }
            }
        }

        tag.update(new_name, command.color, self.clock.now());
        let updated = self.tags.update(&tag).await?;
        self.publisher.publish_all(tag.take_events()).await?;
        Ok(updated.into())
    }
}
