//! Diesel row models for to-do lists and tasks.

use super::schema::{tasks, todo_lists};
use crate::report::domain::{PersistedTaskData, Task, TaskId, TodoListId};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for to-do lists.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = todo_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoListRow {
    /// List identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub user_id: uuid::Uuid,
}

/// Query result row for tasks.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = tasks)]
#[diesel(belongs_to(TodoListRow, foreign_key = todo_list_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning list identifier.
    pub todo_list_id: uuid::Uuid,
    /// Completion flag.
    pub completion_status: bool,
    /// Completion timestamp.
    pub completion_date_time: Option<DateTime<Utc>>,
    /// Deadline.
    pub due_date_time: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(row.id),
            todo_list_id: TodoListId::from_uuid(row.todo_list_id),
            completion_status: row.completion_status,
            completion_date_time: row.completion_date_time,
            due_date_time: row.due_date_time,
        })
    }
}
