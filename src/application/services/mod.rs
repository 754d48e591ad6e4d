// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        cache::CacheReader,
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            comments::CommentCommandService, tags::TagCommandService, users::UserCommandService,
        },
        events::{CacheInvalidationSubscriber, SyncEventDispatcher, TagLinkCascadeSubscriber},
        ports::{cache::CacheStore, events::EventPublisher, time::Clock},
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            comments::CommentQueryService, tags::TagQueryService, users::UserQueryService,
        },
    },
    config::AppConfig,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        comment::{CommentReadRepository, CommentWriteRepository},
        tag::TagRepository,
        user::UserRepository,
    },
};

/// Ports an application is assembled from. Repository and cache
/// implementations live behind these trait objects and stay out of the core.
pub struct ApplicationPorts {
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub tag_repo: Arc<dyn TagRepository>,
    pub comment_write_repo: Arc<dyn CommentWriteRepository>,
    pub comment_read_repo: Arc<dyn CommentReadRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub cache: Arc<dyn CacheStore>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub tag_commands: Arc<TagCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub user_commands: Arc<UserCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub tag_queries: Arc<TagQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
    publisher: Arc<dyn EventPublisher>,
}

impl ApplicationServices {
    /// Wire every service from the supplied ports. The event pipeline is an
    /// explicit subscriber list: tag-link cascade first, cache invalidation
    /// second, so links are gone before their cached views are dropped.
    pub fn new(config: &AppConfig, ports: ApplicationPorts) -> Self {
        let dispatcher = SyncEventDispatcher::with_subscribers(vec![
            Arc::new(TagLinkCascadeSubscriber::new(Arc::clone(
                &ports.article_write_repo,
            ))),
            Arc::new(CacheInvalidationSubscriber::new(Arc::clone(&ports.cache))),
        ]);
        let publisher: Arc<dyn EventPublisher> = Arc::new(dispatcher);

        Self::with_publisher(config, ports, publisher)
    }

    /// Same wiring with a caller-supplied publisher; used by tests that want
    /// to observe or reroute the event stream.
    pub fn with_publisher(
        config: &AppConfig,
        ports: ApplicationPorts,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        let detail_cache = CacheReader::new(Arc::clone(&ports.cache), config.cache_detail_ttl());
        let list_cache = CacheReader::new(Arc::clone(&ports.cache), config.cache_list_ttl());

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&ports.article_write_repo),
            Arc::clone(&ports.article_read_repo),
            Arc::clone(&ports.category_repo),
            Arc::clone(&ports.clock),
            Arc::clone(&publisher),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&ports.category_repo),
            Arc::clone(&ports.article_read_repo),
            Arc::clone(&ports.clock),
            Arc::clone(&publisher),
        ));
        let tag_commands = Arc::new(TagCommandService::new(
            Arc::clone(&ports.tag_repo),
            Arc::clone(&ports.clock),
            Arc::clone(&publisher),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&ports.comment_write_repo),
            Arc::clone(&ports.comment_read_repo),
            Arc::clone(&ports.article_read_repo),
            Arc::clone(&ports.clock),
            Arc::clone(&publisher),
        ));
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&ports.user_repo),
            Arc::clone(&ports.clock),
            Arc::clone(&publisher),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&ports.article_read_repo),
            detail_cache.clone(),
            list_cache.clone(),
            config.default_page_size(),
            config.max_page_size(),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&ports.category_repo),
            list_cache.clone(),
        ));
        let tag_queries = Arc::new(TagQueryService::new(
            Arc::clone(&ports.tag_repo),
            list_cache.clone(),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&ports.comment_read_repo),
            list_cache,
            config.default_page_size(),
            config.max_page_size(),
            config.latest_replies_per_comment(),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&ports.user_repo),
            detail_cache,
        ));

        Self {
            article_commands,
            category_commands,
            tag_commands,
            comment_commands,
            user_commands,
            article_queries,
            category_queries,
            tag_queries,
            comment_queries,
            user_queries,
            publisher,
        }
    }

    pub fn publisher(&self) -> Arc<dyn EventPublisher> {
        Arc::clone(&self.publisher)
    }
}
