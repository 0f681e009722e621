//! `PostgreSQL` adapters for reporting lookups.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, PostgresTodoListRepository, ReportPgPool};
