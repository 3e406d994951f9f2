//! Service layer orchestrating validation and repository access.

use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatchDraft},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task CRUD operations.
#[derive(Debug, Error)]
pub enum TaskCrudError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task CRUD service operations.
pub type TaskCrudResult<T> = Result<T, TaskCrudError>;

/// Task CRUD orchestration service.
///
/// Stateless across requests: every operation is validation followed by at
/// most one repository call, and any single-request failure leaves the
/// service usable for the next request.
#[derive(Clone)]
pub struct TaskCrudService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskCrudService<R>
where
    R: TaskRepository,
{
    /// Creates a new task CRUD service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCrudError::Repository`] when the store cannot be read.
    pub async fn list(&self) -> TaskCrudResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Validates a draft and persists the resulting task.
    ///
    /// Nothing is persisted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCrudError::Domain`] when the draft is invalid or
    /// [`TaskCrudError::Repository`] when persistence fails.
    pub async fn create(&self, draft: &TaskDraft) -> TaskCrudResult<Task> {
        let record = draft.validate()?;
        Ok(self.repository.create(record).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCrudError::Repository`] when the store cannot be read.
    pub async fn get(&self, id: TaskId) -> TaskCrudResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Validates the present fields of a partial payload and applies them.
    ///
    /// Returns `Ok(None)` when the task does not exist; the store is not
    /// consulted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCrudError::Domain`] when a present field is invalid or
    /// [`TaskCrudError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        id: TaskId,
        draft: &TaskPatchDraft,
    ) -> TaskCrudResult<Option<Task>> {
        let patch = draft.validate()?;
        Ok(self.repository.update_by_id(id, patch).await?)
    }

    /// Removes a task, reporting whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCrudError::Repository`] when the store rejects the
    /// write.
    pub async fn delete(&self, id: TaskId) -> TaskCrudResult<bool> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
