// src/domain/tag/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::events::{EventBuffer, EventPayload, EventSource};
use crate::domain::tag::value_objects::{TagId, TagName};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Tag {
    pub fn restore(
        id: TagId,
        name: TagName,
        color: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            color,
            created_at,
            updated_at,
            events: EventBuffer::default(),
        }
    }

    /// Same no-op semantics as category renames: an identical name leaves the
    /// name untouched while a color change still applies.
    pub fn update(&mut self, name: Option<TagName>, color: Option<String>, now: DateTime<Utc>) {
        let old_name = self.name.clone();
        let mut changed = false;

        if let Some(new_name) = name {
            if new_name != self.name {
                self.name = new_name;
                changed = true;
            }
        }
        if let Some(new_color) = color {
            if self.color.as_deref() != Some(new_color.as_str()) {
                self.color = Some(new_color);
                changed = true;
            }
        }

        if changed {
            self.updated_at = now;
            self.events.record(
                EventPayload::TagUpdated {
                    id: self.id,
                    old_name: old_name.as_str().to_string(),
                    new_name: self.name.as_str().to_string(),
                },
                now,
            );
        }
    }
}

impl EventSource for Tag {
    fn event_buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.events
    }
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewTag {
    pub fn new(name: TagName, color: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            name,
            color,
            created_at: now,
            updated_at: now,
        }
    }
}
