// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) publisher: Arc<dyn EventPublisher>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            categories,
            clock,
            publisher,
        }
    }
}
