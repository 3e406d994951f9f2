//! Board state controller mirroring server-side task state.

use super::api::TasksApi;
use crate::task::domain::{Status, Task, TaskDraft, TaskId, TaskPatchDraft};

const FETCH_FAILED: &str = "Failed to fetch tasks. Please try again.";
const CREATE_FAILED: &str = "Failed to create task. Please try again.";
const DELETE_FAILED: &str = "Failed to delete task. Please try again.";
const UPDATE_FAILED: &str = "Failed to update task. Please try again.";
const TITLE_REQUIRED: &str = "Task title is required";

/// Client-side state controller for the task board.
///
/// Holds the task list, the new-task form draft, and the loading/error
/// indicators the view renders from. Every mutation is followed by a full
/// resynchronization with the server; the controller never applies an
/// optimistic local patch that could diverge from server truth. In-flight
/// requests are not cancelled, so overlapping mutations resolve to
/// whichever refresh completes last.
pub struct TaskBoardController {
    api: TasksApi,
    tasks: Vec<Task>,
    loading: bool,
    error: String,
    draft: TaskDraft,
}

impl TaskBoardController {
    /// Creates a controller talking to the given API client.
    #[must_use]
    pub fn new(api: TasksApi) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            loading: false,
            error: String::new(),
            draft: TaskDraft::default(),
        }
    }

    /// Returns the mirrored task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns whether a list fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current user-facing error text, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Returns the in-progress new-task form values.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Performs the initial synchronization; call once after construction.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Replaces the task list with the server's current state.
    ///
    /// On transport failure the previous list is kept and the error text
    /// is set to a fixed retry-prompting message.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error.clear();
            }
            Err(_) => {
                self.error = FETCH_FAILED.to_owned();
            }
        }
        self.loading = false;
    }

    /// Updates the draft title; no network traffic.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.set_title(title);
    }

    /// Updates the draft description; no network traffic.
    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.set_description(description);
    }

    /// Updates the draft priority selection; no network traffic.
    pub fn set_draft_priority(&mut self, priority: impl Into<String>) {
        self.draft.set_priority(priority);
    }

    /// Updates the draft status selection; no network traffic.
    pub fn set_draft_status(&mut self, status: impl Into<String>) {
        self.draft.set_status(status);
    }

    /// Submits the draft as a new task.
    ///
    /// An empty trimmed title aborts before any network call. On success
    /// the draft resets to its defaults and the list is re-fetched; on
    /// failure the draft is kept so the user can retry.
    pub async fn submit(&mut self) {
        if self.draft.title().trim().is_empty() {
            self.error = TITLE_REQUIRED.to_owned();
            return;
        }
        match self.api.create(&self.draft).await {
            Ok(_) => {
                self.draft = TaskDraft::default();
                self.error.clear();
                self.refresh().await;
            }
            Err(_) => {
                self.error = CREATE_FAILED.to_owned();
            }
        }
    }

    /// Deletes a task, then resynchronizes the list.
    pub async fn delete(&mut self, id: TaskId) {
        match self.api.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(_) => {
                self.error = DELETE_FAILED.to_owned();
            }
        }
    }

    /// Moves a task to a new progress state, then resynchronizes the list.
    pub async fn change_status(&mut self, id: TaskId, status: Status) {
        let patch = TaskPatchDraft::default().with_status(status.as_str());
        match self.api.update(id, &patch).await {
            Ok(_) => self.refresh().await,
            Err(_) => {
                self.error = UPDATE_FAILED.to_owned();
            }
        }
    }
}
