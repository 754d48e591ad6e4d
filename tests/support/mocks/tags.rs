// tests/support/mocks/tags.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use blogcore::domain::errors::{DomainError, DomainResult};
use blogcore::domain::tag::entity::{NewTag, Tag};
use blogcore::domain::tag::repository::TagRepository;
use blogcore::domain::tag::value_objects::{TagId, TagName};

pub struct InMemoryTagRepo {
    rows: Mutex<HashMap<i64, Tag>>,
    next_id: AtomicI64,
}

impl InMemoryTagRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl Default for InMemoryTagRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepo {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let id = TagId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Tag::restore(id, tag.name, tag.color, tag.created_at, tag.updated_at);
        let mut rows = self.rows.lock().unwrap();
        rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, tag: &Tag) -> DomainResult<Tag> {
        let stored = Tag::restore(
            tag.id,
            tag.name.clone(),
            tag.color.clone(),
            tag.created_at,
            tag.updated_at,
        );
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&i64::from(tag.id)) {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        rows.insert(i64::from(tag.id), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().find(|tag| tag.name == *name).cloned())
    }

    async fn exists_by_id(&self, id: TagId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.contains_key(&i64::from(id)))
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let rows = self.rows.lock().unwrap();
        let mut all: Vec<Tag> = rows.values().cloned().collect();
        all.sort_by_key(|tag| i64::from(tag.id));
        Ok(all)
    }
}
