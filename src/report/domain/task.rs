//! Read-only task records as consumed by reporting.

use super::{TaskId, TodoListId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task belonging to exactly one to-do list.
///
/// Tasks are created and updated elsewhere; reporting never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    todo_list_id: TodoListId,
    completion_status: bool,
    completion_date_time: Option<DateTime<Utc>>,
    due_date_time: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning to-do list.
    pub todo_list_id: TodoListId,
    /// Whether the task has been marked complete.
    pub completion_status: bool,
    /// When the task was completed, if it was.
    pub completion_date_time: Option<DateTime<Utc>>,
    /// Task deadline.
    pub due_date_time: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task due at `due_date_time`.
    #[must_use]
    pub fn pending(todo_list_id: TodoListId, due_date_time: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            todo_list_id,
            completion_status: false,
            completion_date_time: None,
            due_date_time,
        }
    }

    /// Creates a task completed at `completed_at`.
    #[must_use]
    pub fn completed(
        todo_list_id: TodoListId,
        due_date_time: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            todo_list_id,
            completion_status: true,
            completion_date_time: Some(completed_at),
            due_date_time,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            todo_list_id: data.todo_list_id,
            completion_status: data.completion_status,
            completion_date_time: data.completion_date_time,
            due_date_time: data.due_date_time,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning to-do list identifier.
    #[must_use]
    pub const fn todo_list_id(&self) -> TodoListId {
        self.todo_list_id
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn completion_status(&self) -> bool {
        self.completion_status
    }

    /// Returns the completion timestamp, if recorded.
    #[must_use]
    pub const fn completion_date_time(&self) -> Option<DateTime<Utc>> {
        self.completion_date_time
    }

    /// Returns the task deadline.
    #[must_use]
    pub const fn due_date_time(&self) -> DateTime<Utc> {
        self.due_date_time
    }
}
