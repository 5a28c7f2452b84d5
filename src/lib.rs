//! Taskboard: to-do task management backend.
//!
//! This crate provides the task record, a storage contract any backend can
//! satisfy, a concurrency-safe in-memory store, and a service that validates
//! caller input before it reaches storage.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Validation and orchestration over an injected port
//!
//! # Modules
//!
//! - [`task`]: Task model, storage contract, in-memory store and service

pub mod task;
