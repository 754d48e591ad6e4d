// src/application/commands/tags/create.rs
use std::collections::HashSet;

use super::TagCommandService;
use crate::{
    application::{
        dto::TagDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        events::{DomainEvent, EventPayload},
        tag::{NewTag, Tag, TagName},
    },
};

pub struct CreateTagCommand {
    pub name: String,
    pub color: Option<String>,
}

/// Bulk import of tag names, e.g. from a post editor's free-form tag field.
/// Blank entries are dropped, names are trimmed and deduplicated by exact
/// string equality, and names already present are skipped; the result may be
/// smaller than the input.
pub struct BatchCreateTagsCommand {
    pub names: Vec<String>,
}

impl TagCommandService {
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TagName::new(command.name)?;
        if self.tags.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "tag name '{name}' is already in use"
            )));
        }
        let created = self.insert_and_publish(name, command.color).await?;
        Ok(created.into())
    }

    pub async fn batch_create_tags(
        &self,
        command: BatchCreateTagsCommand,
    ) -> ApplicationResult<Vec<TagDto>> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for raw in command.names {
            if raw.trim().is_empty() {
                continue;
            }
            let name = TagName::new(raw)?;
            if seen.insert(name.as_str().to_string()) {
                candidates.push(name);
            }
        }

        let mut created = Vec::new();
        for name in candidates {
            if self.tags.find_by_name(&name).await?.is_some() {
                continue;
            }
            let tag = self.insert_and_publish(name, None).await?;
            created.push(tag.into());
        }
        Ok(created)
    }

    async fn insert_and_publish(
        &self,
        name: TagName,
        color: Option<String>,
    ) -> ApplicationResult<Tag> {
        let now = self.clock.now();
        let created = self.tags.insert(NewTag::new(name, color, now)).await?;
        self.publisher
            .publish(DomainEvent::new(
                EventPayload::TagCreated {
                    id: created.id,
                    name: created.name.as_str().to_string(),
                },
                now,
            ))
            .await?;
        Ok(created)
    }
}
