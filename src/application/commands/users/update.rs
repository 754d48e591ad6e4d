// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::events::EventSource,
};

/// Profile edits always target the acting user's own record; there is no
/// target id to get wrong.
pub struct UpdateProfileCommand {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserProfileDto> {
        let mut user = self
            .users
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        user.update_profile(command.display_name, command.avatar_url, self.clock.now());
        let updated = self.users.update(&user).await?;
        self.publisher.publish_all(user.take_events()).await?;
        Ok(updated.into())
    }
}
