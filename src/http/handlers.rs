//! Route handlers mapping CRUD outcomes to response envelopes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mockable::Clock;
use serde_json::json;
use tracing::{error, info};

use super::AppState;
use crate::http::envelope::Envelope;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatchDraft};
use crate::task::ports::TaskRepository;
use crate::task::services::TaskCrudError;

/// Fixed body for unknown or unparseable task identifiers. Identifiers are
/// opaque, so a malformed one is indistinguishable from an absent one.
fn not_found_response() -> Response {
    let body = Json(Envelope::<Task>::failure("task not found"));
    (StatusCode::NOT_FOUND, body).into_response()
}

fn crud_error_response(err: &TaskCrudError) -> Response {
    match err {
        TaskCrudError::Domain(domain) => {
            let body = Json(Envelope::<Task>::failure(domain.to_string()));
            (StatusCode::BAD_REQUEST, body).into_response()
        }
        TaskCrudError::Repository(repository) => {
            error!(error = %repository, "task store failure");
            let body = Json(Envelope::<Task>::failure("internal server error"));
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.parse().ok()
}

pub(crate) async fn welcome_handler() -> impl IntoResponse {
    Json(json!({"message": "Task Manager API is running"}))
}

pub(crate) async fn health_handler<R, C>(State(state): State<AppState<R, C>>) -> impl IntoResponse
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(json!({"status": "OK", "timestamp": state.clock.utc().to_rfc3339()}))
}

pub(crate) async fn list_tasks_handler<R, C>(State(state): State<AppState<R, C>>) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    match state.service.list().await {
        Ok(tasks) => Json(Envelope::ok(tasks)).into_response(),
        Err(err) => crud_error_response(&err),
    }
}

pub(crate) async fn create_task_handler<R, C>(
    State(state): State<AppState<R, C>>,
    Json(draft): Json<TaskDraft>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    match state.service.create(&draft).await {
        Ok(task) => {
            info!(id = %task.id(), "task created");
            (StatusCode::CREATED, Json(Envelope::ok(task))).into_response()
        }
        Err(err) => crud_error_response(&err),
    }
}

pub(crate) async fn get_task_handler<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return not_found_response();
    };
    match state.service.get(id).await {
        Ok(Some(task)) => Json(Envelope::ok(task)).into_response(),
        Ok(None) => not_found_response(),
        Err(err) => crud_error_response(&err),
    }
}

pub(crate) async fn update_task_handler<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
    Json(draft): Json<TaskPatchDraft>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return not_found_response();
    };
    match state.service.update(id, &draft).await {
        Ok(Some(task)) => Json(Envelope::ok(task)).into_response(),
        Ok(None) => not_found_response(),
        Err(err) => crud_error_response(&err),
    }
}

pub(crate) async fn delete_task_handler<R, C>(
    State(state): State<AppState<R, C>>,
    Path(raw_id): Path<String>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(id) = parse_task_id(&raw_id) else {
        return not_found_response();
    };
    match state.service.delete(id).await {
        Ok(true) => {
            info!(%id, "task deleted");
            Json(Envelope::<Task>::confirmed()).into_response()
        }
        Ok(false) => not_found_response(),
        Err(err) => crud_error_response(&err),
    }
}
