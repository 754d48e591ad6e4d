// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, time::Clock},
    domain::{article::ArticleReadRepository, category::CategoryRepository},
};

/// Coordinator for the invariants a single category cannot see: name
/// uniqueness across siblings and deletion against live article references.
pub struct CategoryCommandService {
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) articles: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) publisher: Arc<dyn EventPublisher>,
}

impl CategoryCommandService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            categories,
            articles,
            clock,
            publisher,
        }
    }
}
