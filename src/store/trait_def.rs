use crate::models::{CreateUserRequest, User};
use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, assigning its id and creation timestamp
    async fn insert(&self, request: CreateUserRequest) -> StoreResult<User>;

    /// Get a user by id
    async fn get(&self, id: i64) -> Result<Option<User>>;

    /// All stored users, in insertion order
    async fn list(&self) -> Result<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> Result<usize>;
}
