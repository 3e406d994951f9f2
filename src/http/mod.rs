//! REST surface over the task CRUD service.
//!
//! Exposes the JSON API: welcome and health endpoints plus the
//! `/api/tasks` resource routes. Handlers hold no state of their own;
//! everything flows through [`AppState`] into the service layer.

mod envelope;
mod handlers;

pub use envelope::Envelope;

use axum::Router;
use axum::routing::get;
use mockable::Clock;
use std::sync::Arc;

use crate::task::ports::TaskRepository;
use crate::task::services::TaskCrudService;

/// Shared request-handling state.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    pub(crate) service: Arc<TaskCrudService<R>>,
    pub(crate) clock: Arc<C>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates request-handling state over a service and a clock.
    #[must_use]
    pub const fn new(service: Arc<TaskCrudService<R>>, clock: Arc<C>) -> Self {
        Self { service, clock }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// Builds the application router over the given state.
pub fn build_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::welcome_handler))
        .route("/health", get(handlers::health_handler::<R, C>))
        .route(
            "/api/tasks",
            get(handlers::list_tasks_handler::<R, C>)
                .post(handlers::create_task_handler::<R, C>),
        )
        .route(
            "/api/tasks/:id",
            get(handlers::get_task_handler::<R, C>)
                .put(handlers::update_task_handler::<R, C>)
                .delete(handlers::delete_task_handler::<R, C>),
        )
        .with_state(state)
}
