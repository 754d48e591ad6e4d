pub mod cache_invalidation;
pub mod dispatcher;
pub mod subscriber;
pub mod tag_links;

pub use cache_invalidation::CacheInvalidationSubscriber;
pub use dispatcher::SyncEventDispatcher;
pub use subscriber::EventSubscriber;
pub use tag_links::TagLinkCascadeSubscriber;
