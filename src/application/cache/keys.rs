// src/application/cache/keys.rs
//! Cache key layout. Every key the crate reads or evicts is built here so the
//! invalidation policy and the query services can never drift apart.

use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use crate::domain::category::value_objects::CategoryId;
use crate::domain::tag::value_objects::TagId;
use crate::domain::user::value_objects::UserId;

pub fn article_detail(id: ArticleId) -> String {
    format!("articles:detail:{id}")
}

/// Prefix shared by every paged article listing; used with a `*` suffix to
/// evict all pages at once rather than enumerating page/status combinations.
pub const ARTICLE_LIST_PREFIX: &str = "articles:list:";

pub fn article_list(status: Option<ArticleStatus>, page: u64, per_page: u32) -> String {
    let status = status.map_or("all", |status| status.as_str());
    format!("{ARTICLE_LIST_PREFIX}{status}:{page}:{per_page}")
}

pub fn category_detail(id: CategoryId) -> String {
    format!("categories:detail:{id}")
}

pub const CATEGORIES_ALL: &str = "categories:all";

pub fn tag_detail(id: TagId) -> String {
    format!("tags:detail:{id}")
}

pub const TAGS_ALL: &str = "tags:all";

pub fn comment_threads(article_id: ArticleId, page: u64, per_page: u32) -> String {
    format!("comments:article:{article_id}:{page}:{per_page}")
}

/// Prefix covering every cached comment page of one article.
pub fn comment_threads_prefix(article_id: ArticleId) -> String {
    format!("comments:article:{article_id}:")
}

pub fn user_profile(id: UserId) -> String {
    format!("users:profile:{id}")
}

/// Turn a prefix into the wildcard form understood by `CacheStore::evict`.
pub fn as_pattern(prefix: &str) -> String {
    format!("{prefix}*")
}
