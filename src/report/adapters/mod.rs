//! Adapter implementations for the reporting ports.

pub mod memory;
pub mod postgres;
