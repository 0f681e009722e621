//! Query parameters for task lookups.

use crate::report::domain::{Task, TodoListId};

/// Comparison between a task's completion time and its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineComparison {
    /// `completion_date_time > due_date_time`.
    CompletedAfterDue,
    /// `completion_date_time <= due_date_time`.
    CompletedByDue,
}

/// Filter over the tasks of one to-do list.
///
/// Unset criteria match every task in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskQuery {
    todo_list_id: TodoListId,
    completion_status: Option<bool>,
    deadline: Option<DeadlineComparison>,
}

impl TaskQuery {
    /// Matches every task in the given list.
    #[must_use]
    pub const fn for_list(todo_list_id: TodoListId) -> Self {
        Self {
            todo_list_id,
            completion_status: None,
            deadline: None,
        }
    }

    /// Restricts the query to tasks with the given completion status.
    #[must_use]
    pub const fn with_completion_status(mut self, completed: bool) -> Self {
        self.completion_status = Some(completed);
        self
    }

    /// Shorthand for `with_completion_status(true)`.
    #[must_use]
    pub const fn completed(self) -> Self {
        self.with_completion_status(true)
    }

    /// Adds a completion-versus-deadline predicate.
    #[must_use]
    pub const fn with_deadline(mut self, comparison: DeadlineComparison) -> Self {
        self.deadline = Some(comparison);
        self
    }

    /// Returns the list being queried.
    #[must_use]
    pub const fn todo_list_id(&self) -> TodoListId {
        self.todo_list_id
    }

    /// Returns the required completion status, if any.
    #[must_use]
    pub const fn completion_status(&self) -> Option<bool> {
        self.completion_status
    }

    /// Returns the deadline predicate, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DeadlineComparison> {
        self.deadline
    }

    /// Evaluates the query against a loaded task.
    ///
    /// Adapters that filter in process use this; SQL adapters translate the
    /// same criteria into their query builder.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if task.todo_list_id() != self.todo_list_id {
            return false;
        }
        if self
            .completion_status
            .is_some_and(|status| task.completion_status() != status)
        {
            return false;
        }
        match self.deadline {
            None => true,
            Some(DeadlineComparison::CompletedAfterDue) => task
                .completion_date_time()
                .is_some_and(|completed_at| completed_at > task.due_date_time()),
            Some(DeadlineComparison::CompletedByDue) => task
                .completion_date_time()
                .is_some_and(|completed_at| completed_at <= task.due_date_time()),
        }
    }
}
