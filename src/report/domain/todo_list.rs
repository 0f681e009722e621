//! The single to-do list owned by each user.

use super::{Task, TodoListId, UserId};
use serde::{Deserialize, Serialize};

/// A user's to-do list together with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: TodoListId,
    owner: UserId,
    tasks: Vec<Task>,
}

impl TodoList {
    /// Creates an empty list owned by `owner`.
    #[must_use]
    pub const fn new(id: TodoListId, owner: UserId) -> Self {
        Self {
            id,
            owner,
            tasks: Vec::new(),
        }
    }

    /// Attaches the list's tasks.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> TodoListId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the tasks loaded with the list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
