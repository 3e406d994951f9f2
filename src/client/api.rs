//! Typed HTTP client for the task API.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http::Envelope;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatchDraft};

/// Errors surfaced by the task API client.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The request could not be sent or its body could not be decoded.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure envelope.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Result type for task API calls.
pub type ApiClientResult<T> = Result<T, ApiClientError>;

/// Thin typed wrapper over the REST surface, one method per operation.
///
/// The API base URL is injected at construction rather than read from
/// process-wide state; the client holds nothing else.
#[derive(Debug, Clone)]
pub struct TasksApi {
    http: reqwest::Client,
    base_url: String,
}

impl TasksApi {
    /// Creates a client rooted at `base_url`, e.g. `http://host:port/api`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: raw.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetches all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] when the server is unreachable or
    /// answers with a failure envelope.
    pub async fn list(&self) -> ApiClientResult<Vec<Task>> {
        let response = self
            .http
            .get(format!("{}/tasks", self.base_url))
            .send()
            .await?;
        require_data(decode(response).await?)
    }

    /// Creates a task from a draft payload and returns the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Rejected`] carrying the server's message
    /// when validation fails, or [`ApiClientError::Transport`] when the
    /// server is unreachable.
    pub async fn create(&self, draft: &TaskDraft) -> ApiClientResult<Task> {
        let response = self
            .http
            .post(format!("{}/tasks", self.base_url))
            .json(draft)
            .send()
            .await?;
        require_data(decode(response).await?)
    }

    /// Fetches a single task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Rejected`] when the task does not exist,
    /// or [`ApiClientError::Transport`] when the server is unreachable.
    pub async fn fetch(&self, id: TaskId) -> ApiClientResult<Task> {
        let response = self
            .http
            .get(format!("{}/tasks/{id}", self.base_url))
            .send()
            .await?;
        require_data(decode(response).await?)
    }

    /// Applies a partial update and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Rejected`] when the task does not exist
    /// or a supplied field is invalid, or [`ApiClientError::Transport`]
    /// when the server is unreachable.
    pub async fn update(&self, id: TaskId, patch: &TaskPatchDraft) -> ApiClientResult<Task> {
        let response = self
            .http
            .put(format!("{}/tasks/{id}", self.base_url))
            .json(patch)
            .send()
            .await?;
        require_data(decode(response).await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Rejected`] when the task does not exist,
    /// or [`ApiClientError::Transport`] when the server is unreachable.
    pub async fn delete(&self, id: TaskId) -> ApiClientResult<()> {
        let response = self
            .http
            .delete(format!("{}/tasks/{id}", self.base_url))
            .send()
            .await?;
        decode::<()>(response).await.map(|_| ())
    }
}

/// Decodes a response into an envelope, converting non-success statuses
/// into [`ApiClientError::Rejected`] with the server's message when one is
/// present.
async fn decode<T>(response: reqwest::Response) -> ApiClientResult<Envelope<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response
            .json::<Envelope<()>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| format!("unexpected status {status}"));
        Err(ApiClientError::Rejected(message))
    }
}

fn require_data<T>(envelope: Envelope<T>) -> ApiClientResult<T> {
    envelope
        .data
        .ok_or_else(|| ApiClientError::Rejected("response carried no data".to_owned()))
}
