// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod articles;
pub mod cache;
pub mod categories;
pub mod clock;
pub mod comments;
pub mod publisher;
pub mod tags;
pub mod users;

pub use articles::InMemoryArticleRepo;
pub use cache::FailingEvictCache;
pub use categories::InMemoryCategoryRepo;
pub use clock::ManualClock;
pub use comments::InMemoryCommentRepo;
pub use publisher::{RecordingPublisher, RecordingSubscriber};
pub use tags::InMemoryTagRepo;
pub use users::InMemoryUserRepo;
