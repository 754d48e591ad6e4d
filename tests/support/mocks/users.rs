// tests/support/mocks/users.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use blogcore::domain::errors::{DomainError, DomainResult};
use blogcore::domain::user::entity::{NewUser, User};
use blogcore::domain::user::repository::UserRepository;
use blogcore::domain::user::value_objects::{GitHubId, UserId};

pub struct InMemoryUserRepo {
    rows: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst))?;
        let stored = User::restore(
            id,
            user.github_id,
            user.username,
            user.display_name,
            user.avatar_url,
            user.created_at,
            user.updated_at,
        );
        let mut rows = self.rows.lock().unwrap();
        rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> DomainResult<User> {
        let stored = User::restore(
            user.id,
            user.github_id.clone(),
            user.username.clone(),
            user.display_name.clone(),
            user.avatar_url.clone(),
            user.created_at,
            user.updated_at,
        );
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&i64::from(user.id)) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        rows.insert(i64::from(user.id), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_github_id(&self, github_id: &GitHubId) -> DomainResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|user| user.github_id == *github_id)
            .cloned())
    }

    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.contains_key(&i64::from(id)))
    }
}
