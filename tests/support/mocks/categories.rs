// tests/support/mocks/categories.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use blogcore::domain::category::entity::{Category, NewCategory};
use blogcore::domain::category::repository::CategoryRepository;
use blogcore::domain::category::value_objects::{CategoryId, CategoryName};
use blogcore::domain::errors::{DomainError, DomainResult};

pub struct InMemoryCategoryRepo {
    rows: Mutex<HashMap<i64, Category>>,
    next_id: AtomicI64,
}

impl InMemoryCategoryRepo {
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

impl Default for InMemoryCategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let id = CategoryId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = Category::restore(
            id,
            category.name,
            category.icon,
            category.created_at,
            category.updated_at,
        );
        let mut rows = self.rows.lock().unwrap();
        rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        let stored = Category::restore(
            category.id,
            category.name.clone(),
            category.icon.clone(),
            category.created_at,
            category.updated_at,
        );
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&i64::from(category.id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        rows.insert(i64::from(category.id), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|category| category.name == *name)
            .cloned())
    }

    async fn exists_by_id(&self, id: CategoryId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.contains_key(&i64::from(id)))
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let rows = self.rows.lock().unwrap();
        let mut all: Vec<Category> = rows.values().cloned().collect();
        all.sort_by_key(|category| i64::from(category.id));
        Ok(all)
    }
}
