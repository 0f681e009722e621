//! In-memory to-do store backing both reporting ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::report::{
    domain::{Task, TodoList, TodoListId, UserId},
    ports::{
        TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TodoListRepository,
        TodoListRepositoryError, TodoListRepositoryResult,
    },
};

/// Errors raised while seeding the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InMemoryStoreError {
    /// The owner already has a list.
    #[error("user {0} already owns a todo list")]
    DuplicateOwner(UserId),
    /// A list with the same identifier already exists.
    #[error("duplicate todo list identifier: {0}")]
    DuplicateList(TodoListId),
    /// The task references a list that was never inserted.
    #[error("todo list not found: {0}")]
    UnknownList(TodoListId),
    /// The store lock was poisoned by a panicking writer.
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

/// Thread-safe in-memory implementation of the list and task ports.
///
/// Tasks keep insertion order; lists are keyed by owner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    owners: HashMap<UserId, TodoListId>,
    lists: HashMap<TodoListId, UserId>,
    tasks: Vec<Task>,
}

impl InMemoryTodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a list together with any tasks already attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`InMemoryStoreError::DuplicateOwner`] when the owner already
    /// has a list, [`InMemoryStoreError::DuplicateList`] when the identifier
    /// is taken, and [`InMemoryStoreError::UnknownList`] when an attached
    /// task points at a different list.
    pub fn insert_list(&self, list: &TodoList) -> Result<(), InMemoryStoreError> {
        let mut state = self.write()?;
        if state.owners.contains_key(&list.owner()) {
            return Err(InMemoryStoreError::DuplicateOwner(list.owner()));
        }
        if state.lists.contains_key(&list.id()) {
            return Err(InMemoryStoreError::DuplicateList(list.id()));
        }
        if let Some(stray) = list.tasks().iter().find(|task| task.todo_list_id() != list.id()) {
            return Err(InMemoryStoreError::UnknownList(stray.todo_list_id()));
        }

        state.owners.insert(list.owner(), list.id());
        state.lists.insert(list.id(), list.owner());
        state.tasks.extend(list.tasks().iter().cloned());
        Ok(())
    }

    /// Adds a task to an existing list.
    ///
    /// # Errors
    ///
    /// Returns [`InMemoryStoreError::UnknownList`] when the task's list has
    /// not been inserted.
    pub fn insert_task(&self, task: Task) -> Result<(), InMemoryStoreError> {
        let mut state = self.write()?;
        if !state.lists.contains_key(&task.todo_list_id()) {
            return Err(InMemoryStoreError::UnknownList(task.todo_list_id()));
        }
        state.tasks.push(task);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InMemoryTodoState>, InMemoryStoreError> {
        self.state.read().map_err(|_| InMemoryStoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InMemoryTodoState>, InMemoryStoreError> {
        self.state.write().map_err(|_| InMemoryStoreError::Poisoned)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTodoStore {
    async fn count(&self, query: &TaskQuery) -> TaskRepositoryResult<u64> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        let matching = state.tasks.iter().filter(|task| query.matches(task)).count();
        u64::try_from(matching).map_err(TaskRepositoryError::persistence)
    }

    async fn completion_times(
        &self,
        query: &TaskQuery,
    ) -> TaskRepositoryResult<Vec<DateTime<Utc>>> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        let mut times: Vec<DateTime<Utc>> = state
            .tasks
            .iter()
            .filter(|task| query.matches(task))
            .filter_map(Task::completion_date_time)
            .collect();
        times.sort_unstable();
        Ok(times)
    }
}

#[async_trait]
impl TodoListRepository for InMemoryTodoStore {
    async fn find_by_owner(&self, owner: UserId) -> TodoListRepositoryResult<Option<TodoList>> {
        let state = self.read().map_err(TodoListRepositoryError::persistence)?;
        let list = state.owners.get(&owner).map(|&list_id| {
            let tasks = state
                .tasks
                .iter()
                .filter(|task| task.todo_list_id() == list_id)
                .cloned();
            TodoList::new(list_id, owner).with_tasks(tasks)
        });
        Ok(list)
    }
}
