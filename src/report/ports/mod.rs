//! Port contracts for task reporting.
//!
//! Ports define infrastructure-agnostic, read-only interfaces used by the
//! reports service.

pub mod query;
pub mod task;
pub mod todo_list;

pub use query::{DeadlineComparison, TaskQuery};
pub use task::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use todo_list::{TodoListRepository, TodoListRepositoryError, TodoListRepositoryResult};
