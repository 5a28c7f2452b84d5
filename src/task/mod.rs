//! Task management for Taskboard.
//!
//! Tasks are created, listed, updated and deleted through a
//! [`ports::TaskRepository`]. The repository assigns identifiers and creation
//! timestamps and only ever hands out copies of its records. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
