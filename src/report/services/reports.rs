//! Service layer computing completion statistics for one user.

use crate::report::{
    domain::{TaskCount, TodoList, User, average_per_day, most_completed_day},
    ports::{
        DeadlineComparison, TaskQuery, TaskRepository, TaskRepositoryError, TodoListRepository,
        TodoListRepositoryError,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for report operations.
///
/// A user without a list is not an error; only data-access failures are
/// reported here.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Task lookup failed.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
    /// List lookup failed.
    #[error(transparent)]
    TodoListRepository(#[from] TodoListRepositoryError),
}

/// Result type for report service operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Read-only reporting over a user's to-do list.
///
/// Each operation resolves the user's list and then issues its own
/// aggregation queries; operations share no state.
#[derive(Clone)]
pub struct ReportsService<T, L, C>
where
    T: TaskRepository,
    L: TodoListRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    todo_lists: Arc<L>,
    clock: Arc<C>,
}

impl<T, L, C> ReportsService<T, L, C>
where
    T: TaskRepository,
    L: TodoListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new reports service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, todo_lists: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            todo_lists,
            clock,
        }
    }

    /// Counts total, completed and remaining tasks.
    ///
    /// Returns all zeros when the user has no list yet.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when a repository lookup fails.
    #[tracing::instrument(skip_all, fields(user_id = %user.id()))]
    pub async fn task_count(&self, user: &User) -> ReportResult<TaskCount> {
        let Some(list) = self.list_for(user).await? else {
            return Ok(TaskCount::default());
        };

        let all = TaskQuery::for_list(list.id());
        let total = self.tasks.count(&all).await?;
        let completed = self.tasks.count(&all.completed()).await?;

        let counts = TaskCount::from_totals(total, completed);
        tracing::debug!(?counts, "computed task count");
        Ok(counts)
    }

    /// Average completed tasks per calendar day since signup, floored.
    ///
    /// Returns zero when the user has no list or signed up today.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when a repository lookup fails.
    #[tracing::instrument(skip_all, fields(user_id = %user.id()))]
    pub async fn avg_tasks_per_day(&self, user: &User) -> ReportResult<u64> {
        let Some(list) = self.list_for(user).await? else {
            return Ok(0);
        };

        let days = user.days_since_creation(self.clock.utc());
        if days == 0 {
            tracing::debug!("account created today");
            return Ok(0);
        }

        let completed = self
            .tasks
            .count(&TaskQuery::for_list(list.id()).completed())
            .await?;
        let average = average_per_day(completed, days);
        tracing::debug!(completed, days, average, "computed daily average");
        Ok(average)
    }

    /// Counts tasks completed after their deadline.
    ///
    /// Incomplete tasks are not counted, however overdue.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when a repository lookup fails.
    #[tracing::instrument(skip_all, fields(user_id = %user.id()))]
    pub async fn tasks_not_completed_on_time(&self, user: &User) -> ReportResult<u64> {
        let Some(list) = self.list_for(user).await? else {
            return Ok(0);
        };

        let late = TaskQuery::for_list(list.id())
            .completed()
            .with_deadline(DeadlineComparison::CompletedAfterDue);
        let count = self.tasks.count(&late).await?;
        tracing::debug!(count, "counted late completions");
        Ok(count)
    }

    /// Returns the UTC calendar date with the most completed tasks.
    ///
    /// Ties resolve to the earliest date. Returns `None` when the user has
    /// no list or nothing has been completed.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when a repository lookup fails.
    #[tracing::instrument(skip_all, fields(user_id = %user.id()))]
    pub async fn date_with_most_completed_tasks(
        &self,
        user: &User,
    ) -> ReportResult<Option<NaiveDate>> {
        let Some(list) = self.list_for(user).await? else {
            return Ok(None);
        };

        let times = self
            .tasks
            .completion_times(&TaskQuery::for_list(list.id()).completed())
            .await?;
        let day = most_completed_day(times);
        tracing::debug!(?day, "resolved most productive day");
        Ok(day)
    }

    /// Resolves the user's list.
    ///
    /// Only the list id is read. The tasks loaded with the list are not
    /// consulted; every aggregate is computed by a `TaskRepository` query.
    async fn list_for(&self, user: &User) -> ReportResult<Option<TodoList>> {
        let list = self.todo_lists.find_by_owner(user.id()).await?;
        if list.is_none() {
            tracing::debug!("user has no todo list yet");
        }
        Ok(list)
    }
}
