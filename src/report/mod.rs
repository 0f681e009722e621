//! Completion reporting over a user's to-do list.
//!
//! The module answers four independent questions about one user's tasks:
//! how many there are, how many get completed per day, how many were
//! finished late, and which day saw the most completions. It follows
//! hexagonal architecture:
//!
//! - Domain types and aggregation rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The reports service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
