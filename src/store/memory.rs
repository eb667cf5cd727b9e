use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::models::{CreateUserRequest, User};
use crate::store::{StoreError, StoreResult, UserStore};

/// In-memory user store backed by a concurrent map
///
/// Insertion order is preserved through the monotonically assigned ids.
/// There is no persistence; the store lives and dies with the process.
pub struct InMemoryUserStore {
    users: DashMap<i64, User>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Bulk-load fully formed records, assigning fresh ids
    ///
    /// Used for seeding; bypasses the duplicate-email check.
    pub fn preload(&self, users: Vec<User>) {
        for mut user in users {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            user.id = Some(id);
            self.users.insert(id, user);
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, request: CreateUserRequest) -> StoreResult<User> {
        if let Some(email) = request.email.as_deref() {
            if !email.is_empty() {
                let duplicate = self
                    .users
                    .iter()
                    .any(|entry| entry.value().email.as_deref() == Some(email));
                if duplicate {
                    return Err(StoreError::Conflict);
                }
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: Some(id),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            role: request.role,
            enabled: request.enabled,
            created_at: Some(Utc::now()),
            updated_at: None,
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.users.len())
    }
}
