// src/domain/category/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::events::{EventBuffer, EventPayload, EventSource};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    events: EventBuffer,
}

impl Category {
    pub fn restore(
        id: CategoryId,
        name: CategoryName,
        icon: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            icon,
            created_at,
            updated_at,
            events: EventBuffer::default(),
        }
    }

    /// Apply a rename and/or icon change. A new name equal to the current one
    /// is a no-op for the name; the icon change still applies. Records a
    /// single update event when anything changed.
    pub fn update(
        &mut self,
        name: Option<CategoryName>,
        icon: Option<String>,
        now: DateTime<Utc>,
    ) {
        let old_name = self.name.clone();
        let mut changed = false;

        if let Some(new_name) = name {
            if new_name != self.name {
                self.name = new_name;
                changed = true;
            }
        }
        if let Some(new_icon) = icon {
            if self.icon.as_deref() != Some(new_icon.as_str()) {
                self.icon = Some(new_icon);
                changed = true;
            }
        }

        if changed {
            self.updated_at = now;
            self.events.record(
                EventPayload::CategoryUpdated {
                    id: self.id,
                    old_name: old_name.as_str().to_string(),
                    new_name: self.name.as_str().to_string(),
                },
                now,
            );
        }
    }
}

impl EventSource for Category {
    fn event_buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.events
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(name: CategoryName, icon: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            name,
            icon,
            created_at: now,
            updated_at: now,
        }
    }
}
