//! Client half of the application: API access and board state.
//!
//! The [`TasksApi`] client speaks the same envelope types the server
//! serialises; [`TaskBoardController`] layers list/form state on top of it
//! for a form-driven view.

mod api;
mod controller;

pub use api::{ApiClientError, ApiClientResult, TasksApi};
pub use controller::TaskBoardController;
