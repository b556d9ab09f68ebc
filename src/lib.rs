//! Tareas: single-resource task-record HTTP API backed by `PostgreSQL`.
//!
//! Clients create, list, fetch, update, and delete task records over a
//! JSON HTTP surface; records are persisted in one document-style table
//! addressed by opaque identifiers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, persistence ports and adapters
//! - [`http`]: axum boundary translating wire requests to service calls
//! - [`config`]: Environment-supplied server configuration

pub mod config;
pub mod http;
pub mod task;
