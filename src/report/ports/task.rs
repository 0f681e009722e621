//! Read-only repository port for task aggregation queries.

use super::TaskQuery;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task lookup contract used by reporting.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Counts the tasks matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot be
    /// queried.
    async fn count(&self, query: &TaskQuery) -> TaskRepositoryResult<u64>;

    /// Returns the completion timestamps of tasks matching `query`.
    ///
    /// Tasks without a recorded completion time are skipped. Timestamps are
    /// returned in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot be
    /// queried.
    async fn completion_times(
        &self,
        query: &TaskQuery,
    ) -> TaskRepositoryResult<Vec<DateTime<Utc>>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
