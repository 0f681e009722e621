//! In-memory adapters for reporting tests and embedding.

mod store;

pub use store::{InMemoryStoreError, InMemoryTodoStore};
