// tests/support/mocks/articles.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;

use blogcore::domain::article::entity::{Article, NewArticle};
use blogcore::domain::article::repository::{ArticleReadRepository, ArticleWriteRepository};
use blogcore::domain::article::value_objects::{ArticleId, ArticleStatus};
use blogcore::domain::category::value_objects::CategoryId;
use blogcore::domain::errors::{DomainError, DomainResult};
use blogcore::domain::tag::value_objects::TagId;

/// In-memory article store implementing both repository ports.
pub struct InMemoryArticleRepo {
    rows: Mutex<HashMap<i64, Article>>,
    next_id: AtomicI64,
    fail_next_update: AtomicBool,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            fail_next_update: AtomicBool::new(false),
        }
    }

    /// Arrange the next `update` call to fail with a persistence error.
    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn rebuild(article: &Article) -> DomainResult<Article> {
        Article::restore(
            article.id,
            article.content.clone(),
            article.status,
            article.category_id,
            article.author_id,
            article.tag_ids.clone(),
            article.published_at,
            article.created_at,
            article.updated_at,
        )
    }
}

impl Default for InMemoryArticleRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = ArticleId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Article::restore(
            id,
            article.content,
            article.status,
            article.category_id,
            article.author_id,
            article.tag_ids,
            article.published_at,
            article.created_at,
            article.updated_at,
        )?;
        let mut rows = self.rows.lock().unwrap();
        rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Persistence("simulated write failure".into()));
        }
        // rebuild from persisted fields so tests exercise reconstruction
        let stored = Self::rebuild(article)?;
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&i64::from(article.id)) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        rows.insert(i64::from(article.id), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn remove_tag_from_all(&self, tag_id: TagId) -> DomainResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let mut removed = 0;
        for article in rows.values_mut() {
            if article.tag_ids.remove(&tag_id) {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.contains_key(&i64::from(id)))
    }

    async fn count_by_category(&self, category_id: CategoryId) -> DomainResult<u64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .filter(|article| article.category_id == Some(category_id))
            .count() as u64)
    }

    async fn list_page(
        &self,
        status: Option<ArticleStatus>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Article> = rows
            .values()
            .filter(|article| status.is_none_or(|wanted| article.status == wanted))
            .cloned()
            .collect();
        matching.sort_by_key(|article| i64::from(article.id));
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}
