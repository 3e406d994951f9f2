//! Repository port for task persistence, lookup, and removal.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Absence is an ordinary outcome, not a fault: lookups return `None` and
/// removal reports `false` for unknown identifiers. The error channel is
/// reserved for storage-layer failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Assigns an identifier and creation timestamp, persists the record,
    /// and returns the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn create(&self, record: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns all stored tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot
    /// be read.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot
    /// be read.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Applies the supplied fields to an existing task and returns the
    /// updated record.
    ///
    /// Fields absent from the patch retain their prior values. Returns
    /// `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn update_by_id(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Removes a task, reporting whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
