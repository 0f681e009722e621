//! Todo reports: completion statistics for a personal task manager.
//!
//! This crate computes read-only aggregates over a single user's to-do
//! list: task counts, average completions per day, late completions and
//! the most productive day.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure aggregation logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the task and list stores
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, memory)
//!
//! # Modules
//!
//! - [`report`]: Reporting domain, ports, adapters and service
//! - [`config`]: Database settings loaded from the environment
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod report;
pub mod telemetry;
