//! Domain model for task reporting.
//!
//! Users, lists and tasks are owned by other parts of the application; the
//! reporting domain only reads them and derives aggregate values. All
//! calendar arithmetic uses UTC.

mod ids;
mod statistics;
mod task;
mod todo_list;
mod user;

pub use ids::{TaskId, TodoListId, UserId};
pub use statistics::{TaskCount, average_per_day, completion_day, most_completed_day};
pub use task::{PersistedTaskData, Task};
pub use todo_list::TodoList;
pub use user::User;
