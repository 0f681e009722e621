//! `PostgreSQL` repository implementations for reporting lookups.

use super::{
    models::{TaskRow, TodoListRow},
    schema::{tasks, todo_lists},
};
use crate::report::{
    domain::{Task, TodoList, TodoListId, UserId},
    ports::{
        DeadlineComparison, TaskQuery, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
        TodoListRepository, TodoListRepositoryError, TodoListRepositoryResult,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by reporting adapters.
pub type ReportPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: ReportPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReportPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
        .inspect_err(|err| tracing::warn!(error = %err, "task query failed"))
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn count(&self, query: &TaskQuery) -> TaskRepositoryResult<u64> {
        let lookup = *query;
        self.run_blocking(move |connection| {
            let total = filtered(&lookup)
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn completion_times(
        &self,
        query: &TaskQuery,
    ) -> TaskRepositoryResult<Vec<DateTime<Utc>>> {
        let lookup = *query;
        self.run_blocking(move |connection| {
            let times = completion_times_query(&lookup)
                .load::<Option<DateTime<Utc>>>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(times.into_iter().flatten().collect())
        })
        .await
    }
}

/// `PostgreSQL`-backed to-do list repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoListRepository {
    pool: ReportPgPool,
}

impl PostgresTodoListRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReportPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoListRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoListRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoListRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoListRepositoryError::persistence)?
        .inspect_err(|err| tracing::warn!(error = %err, "todo list query failed"))
    }
}

#[async_trait]
impl TodoListRepository for PostgresTodoListRepository {
    async fn find_by_owner(&self, owner: UserId) -> TodoListRepositoryResult<Option<TodoList>> {
        self.run_blocking(move |connection| {
            let Some(list_row) = todo_lists::table
                .filter(todo_lists::user_id.eq(owner.into_inner()))
                .select(TodoListRow::as_select())
                .first::<TodoListRow>(connection)
                .optional()
                .map_err(TodoListRepositoryError::persistence)?
            else {
                return Ok(None);
            };

            let task_rows = TaskRow::belonging_to(&list_row)
                .select(TaskRow::as_select())
                .order(tasks::id.asc())
                .load::<TaskRow>(connection)
                .map_err(TodoListRepositoryError::persistence)?;

            let list = TodoList::new(
                TodoListId::from_uuid(list_row.id),
                UserId::from_uuid(list_row.user_id),
            )
            .with_tasks(task_rows.into_iter().map(Task::from));
            Ok(Some(list))
        })
        .await
    }
}

/// Translates a [`TaskQuery`] into a boxed Diesel filter over `tasks`.
///
/// Every criterion is a bound parameter or a column-to-column comparison.
fn filtered(query: &TaskQuery) -> tasks::BoxedQuery<'static, Pg> {
    let mut statement = tasks::table
        .filter(tasks::todo_list_id.eq(query.todo_list_id().into_inner()))
        .into_boxed();

    if let Some(status) = query.completion_status() {
        statement = statement.filter(tasks::completion_status.eq(status));
    }

    match query.deadline() {
        Some(DeadlineComparison::CompletedAfterDue) => {
            statement =
                statement.filter(tasks::completion_date_time.gt(tasks::due_date_time.nullable()));
        }
        Some(DeadlineComparison::CompletedByDue) => {
            statement =
                statement.filter(tasks::completion_date_time.le(tasks::due_date_time.nullable()));
        }
        None => {}
    }

    statement
}

fn completion_times_query(
    query: &TaskQuery,
) -> tasks::BoxedQuery<'static, Pg, diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>> {
    filtered(query)
        .filter(tasks::completion_date_time.is_not_null())
        .order((tasks::completion_date_time.asc(), tasks::id.asc()))
        .select(tasks::completion_date_time)
}
