//! Taskboard: a minimal task-management service and client.
//!
//! This crate provides both halves of a task-management application: a
//! REST API exposing CRUD operations over a single task resource, and a
//! board controller that mirrors server state for a form-driven front
//! end.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task validation, persistence ports, and CRUD services
//! - [`http`]: REST surface over the CRUD service
//! - [`client`]: API client and board state controller
//! - [`config`]: Server process configuration

pub mod client;
pub mod config;
pub mod http;
pub mod task;
