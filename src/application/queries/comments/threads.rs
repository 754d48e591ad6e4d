// src/application/queries/comments/threads.rs
use std::collections::HashMap;

use super::CommentQueryService;
use crate::{
    application::{
        cache::keys,
        dto::{CommentThreadDto, Page, PageRequest},
        error::ApplicationResult,
    },
    domain::{article::ArticleId, comment::CommentId},
};

pub struct ListCommentThreadsQuery {
    pub article_id: i64,
    pub page: PageRequest,
}

impl CommentQueryService {
    /// Threaded comment page: one repository call for the top-level page,
    /// one batched call for every reply count and one for the latest-reply
    /// windows. Never one lookup per comment.
    pub async fn list_threads(
        &self,
        query: ListCommentThreadsQuery,
    ) -> ApplicationResult<Page<CommentThreadDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        let page = query
            .page
            .normalize(self.default_page_size, self.max_page_size);
        let key = keys::comment_threads(article_id, page.page, page.per_page);
        if let Some(cached) = self.cache.get::<Page<CommentThreadDto>>(&key).await {
            return Ok(cached);
        }

        let (top_level, total) = self
            .read_repo
            .list_top_level(article_id, page.per_page, page.offset())
            .await?;
        let parent_ids: Vec<CommentId> = top_level.iter().map(|comment| comment.id).collect();
        let mut counts = self.read_repo.count_replies(&parent_ids).await?;
        let mut latest = self
            .read_repo
            .find_latest_replies(&parent_ids, self.latest_replies_per_comment)
            .await?;

        let items = top_level
            .into_iter()
            .map(|comment| {
                // parents the repository omitted have zero replies
                let reply_count = counts.remove(&comment.id).unwrap_or(0);
                let latest_replies = latest
                    .remove(&comment.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect();
                CommentThreadDto {
                    comment: comment.into(),
                    reply_count,
                    latest_replies,
                }
            })
            .collect();

        let result = Page::new(items, page, total);
        self.cache.put(&key, &result).await;
        Ok(result)
    }

    /// Batched reply counts keyed by the requested ids. The result always has
    /// exactly one entry per distinct requested id; zero-reply parents map to
    /// 0 rather than being absent.
    pub async fn reply_counts(&self, parent_ids: &[i64]) -> ApplicationResult<HashMap<i64, u64>> {
        let mut ids = Vec::with_capacity(parent_ids.len());
        for raw in parent_ids {
            ids.push(CommentId::new(*raw)?);
        }
        let counts = self.read_repo.count_replies(&ids).await?;
        Ok(ids
            .into_iter()
            .map(|id| (i64::from(id), counts.get(&id).copied().unwrap_or(0)))
            .collect())
    }
}
