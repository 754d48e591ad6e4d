// src/application/cache/policy.rs
//! Static event → cache-invalidation table. Kept declarative and in one place
//! so the whole policy is unit-testable without a cache backend.

use crate::application::cache::keys;
use crate::domain::events::EventPayload;

/// Ordered list of cache-key patterns to evict for one event. Patterns ending
/// in `*` evict a whole prefix; anything else is an exact key.
pub fn invalidation_targets(payload: &EventPayload) -> Vec<String> {
    match payload {
        EventPayload::ArticleCreated { id, .. }
        | EventPayload::ArticleContentUpdated { id }
        | EventPayload::ArticleCategoryChanged { id, .. }
        | EventPayload::ArticleTagAdded { id, .. }
        | EventPayload::ArticleTagRemoved { id, .. }
        | EventPayload::ArticlePublished { id }
        | EventPayload::ArticleArchived { id }
        | EventPayload::ArticleRevertedToDraft { id } => vec![
            keys::article_detail(*id),
            keys::as_pattern(keys::ARTICLE_LIST_PREFIX),
        ],
        EventPayload::ArticleDeleted { id } => vec![
            keys::article_detail(*id),
            keys::as_pattern(keys::ARTICLE_LIST_PREFIX),
            keys::as_pattern(&keys::comment_threads_prefix(*id)),
        ],
        EventPayload::CategoryCreated { id, .. }
        | EventPayload::CategoryUpdated { id, .. }
        | EventPayload::CategoryDeleted { id } => vec![
            keys::category_detail(*id),
            keys::CATEGORIES_ALL.to_string(),
        ],
        EventPayload::TagCreated { id, .. } | EventPayload::TagUpdated { id, .. } => {
            vec![keys::tag_detail(*id), keys::TAGS_ALL.to_string()]
        }
        // deleting a tag also rewrites article tag sets, so cached article
        // reads are stale as well
        EventPayload::TagDeleted { id } => vec![
            keys::tag_detail(*id),
            keys::TAGS_ALL.to_string(),
            keys::as_pattern(keys::ARTICLE_LIST_PREFIX),
        ],
        EventPayload::CommentCreated { article_id, .. }
        | EventPayload::CommentDeleted { article_id, .. } => {
            vec![keys::as_pattern(&keys::comment_threads_prefix(*article_id))]
        }
        EventPayload::UserProfileUpdated { id } => vec![keys::user_profile(*id)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::ArticleId;
    use crate::domain::category::value_objects::CategoryId;
    use crate::domain::tag::value_objects::TagId;

    #[test]
    fn category_update_evicts_detail_and_list() {
        let targets = invalidation_targets(&EventPayload::CategoryUpdated {
            id: CategoryId::new(4).unwrap(),
            old_name: "a".into(),
            new_name: "b".into(),
        });
        assert_eq!(targets, vec!["categories:detail:4", "categories:all"]);
    }

    #[test]
    fn tag_deletion_covers_article_listings() {
        let targets = invalidation_targets(&EventPayload::TagDeleted {
            id: TagId::new(9).unwrap(),
        });
        assert!(targets.contains(&"articles:list:*".to_string()));
    }

    #[test]
    fn comment_events_evict_only_their_article() {
        let targets = invalidation_targets(&EventPayload::CommentCreated {
            id: crate::domain::comment::CommentId::new(1).unwrap(),
            article_id: ArticleId::new(12).unwrap(),
            parent_id: None,
        });
        assert_eq!(targets, vec!["comments:article:12:*"]);
    }
}
