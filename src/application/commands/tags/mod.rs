pub mod create;
pub mod delete;
pub mod service;
pub mod update;

pub use create::{BatchCreateTagsCommand, CreateTagCommand};
pub use delete::DeleteTagCommand;
pub use service::TagCommandService;
pub use update::UpdateTagCommand;
