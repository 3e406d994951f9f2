//! Task CRUD feature module.
//!
//! Implements the full lifecycle of the task resource: validating raw
//! client payloads into normalized records, persisting them through the
//! repository port, and applying partial updates and deletions. The module
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

#[cfg(test)]
mod tests;
