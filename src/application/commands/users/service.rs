// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, time::Clock},
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) publisher: Arc<dyn EventPublisher>,
}

impl UserCommandService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            users,
            clock,
            publisher,
        }
    }
}
