pub mod cache;
pub mod time;

pub use cache::{InMemoryCache, NullCache};
pub use time::SystemClock;
