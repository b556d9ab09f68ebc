//! Task record management.
//!
//! This module implements the task resource: validated record creation,
//! retrieval, partial update, and deletion against a document collection
//! addressed by opaque identifiers. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
