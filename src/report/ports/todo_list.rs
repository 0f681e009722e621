//! Repository port for resolving a user's to-do list.

use crate::report::domain::{TodoList, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do list repository operations.
pub type TodoListRepositoryResult<T> = Result<T, TodoListRepositoryError>;

/// To-do list lookup contract.
#[async_trait]
pub trait TodoListRepository: Send + Sync {
    /// Finds the list owned by `owner`, including its tasks.
    ///
    /// Returns `None` when the user has not created a list yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListRepositoryError::Persistence`] when the store
    /// cannot be queried.
    async fn find_by_owner(&self, owner: UserId) -> TodoListRepositoryResult<Option<TodoList>>;
}

/// Errors returned by to-do list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoListRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
