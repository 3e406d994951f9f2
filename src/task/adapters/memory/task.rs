//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// In-memory task store keyed by identifier.
///
/// Identifier and creation-timestamp assignment happens here, so callers
/// treat storage as the single source of task identity. Listing preserves
/// insertion order.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    state: Arc<RwLock<InMemoryTaskState>>,
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty repository reading timestamps from the system
    /// clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository reading creation timestamps from the
    /// given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
        }
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, record: NewTask) -> TaskRepositoryResult<Task> {
        let task = Task::create(&record, &*self.clock);
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insertion_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(None);
        };
        task.apply(&patch);
        Ok(Some(task.clone()))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.remove(&id).is_none() {
            return Ok(false);
        }
        state.insertion_order.retain(|existing| *existing != id);
        Ok(true)
    }
}
