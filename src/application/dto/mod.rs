pub mod actor;
pub mod articles;
pub mod categories;
pub mod comments;
pub mod pagination;
pub mod tags;
pub mod users;

pub use actor::AuthenticatedUser;
pub use articles::ArticleDto;
pub use categories::CategoryDto;
pub use comments::{CommentDto, CommentThreadDto};
pub use pagination::{Page, PageRequest};
pub use tags::TagDto;
pub use users::UserProfileDto;
