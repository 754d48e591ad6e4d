pub mod service;
pub mod threads;

pub use service::CommentQueryService;
pub use threads::ListCommentThreadsQuery;
