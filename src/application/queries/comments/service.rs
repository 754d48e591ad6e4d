// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::application::cache::CacheReader;
use crate::domain::comment::CommentReadRepository;

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) cache: CacheReader,
    pub(super) default_page_size: u32,
    pub(super) max_page_size: u32,
    pub(super) latest_replies_per_comment: u32,
}

impl CommentQueryService {
    pub fn new(
        read_repo: Arc<dyn CommentReadRepository>,
        cache: CacheReader,
        default_page_size: u32,
        max_page_size: u32,
        latest_replies_per_comment: u32,
    ) -> Self {
        Self {
            read_repo,
            cache,
            default_page_size,
            max_page_size,
            latest_replies_per_comment,
        }
    }
}
