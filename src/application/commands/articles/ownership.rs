// src/application/commands/articles/ownership.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::Article, user::AuthorId},
};

pub(super) fn ensure_author(
    actor: &AuthenticatedUser,
    article: &Article,
) -> ApplicationResult<()> {
    if article.author_id == AuthorId::from(actor.id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "article does not belong to the acting user",
        ))
    }
}
