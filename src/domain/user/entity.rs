// src/domain/user/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::events::{EventBuffer, EventPayload, EventSource};
use crate::domain::user::value_objects::{GitHubId, UserId, Username};

/// User aggregate root. Authentication happens outside the core; this record
/// carries the externally-assigned identity plus mutable profile fields.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub github_id: GitHubId,
    pub username: Username,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    events: EventBuffer,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: UserId,
        github_id: GitHubId,
        username: Username,
        display_name: String,
        avatar_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            github_id,
            username,
            display_name,
            avatar_url,
            created_at,
            updated_at,
            events: EventBuffer::default(),
        }
    }

    pub fn update_profile(
        &mut self,
        display_name: Option<String>,
        avatar_url: Option<String>,
        now: DateTime<Utc>,
    ) {
        let mut changed = false;
        if let Some(name) = display_name {
            if name != self.display_name {
                self.display_name = name;
                changed = true;
            }
        }
        if let Some(url) = avatar_url {
            if self.avatar_url.as_deref() != Some(url.as_str()) {
                self.avatar_url = Some(url);
                changed = true;
            }
        }
        if changed {
            self.updated_at = now;
            self.events
                .record(EventPayload::UserProfileUpdated { id: self.id }, now);
        }
    }
}

impl EventSource for User {
    fn event_buffer_mut(&mut self) -> &mut EventBuffer {
        &mut self.events
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub github_id: GitHubId,
    pub username: Username,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
