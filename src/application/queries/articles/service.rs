// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::application::cache::CacheReader;
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) detail_cache: CacheReader,
    pub(super) list_cache: CacheReader,
    pub(super) default_page_size: u32,
    pub(super) max_page_size: u32,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        detail_cache: CacheReader,
        list_cache: CacheReader,
        default_page_size: u32,
        max_page_size: u32,
    ) -> Self {
        Self {
            read_repo,
            detail_cache,
            list_cache,
            default_page_size,
            max_page_size,
        }
    }
}
