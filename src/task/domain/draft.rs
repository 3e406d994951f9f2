//! Candidate task payloads and their validation into normalized records.

use super::{Priority, Status, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Raw new-task payload as submitted by a client.
///
/// Enumerated fields are carried as raw text so that validation, not
/// deserialisation, decides whether a value is acceptable. The `Default`
/// value mirrors a fresh client form: empty title and description with the
/// default priority and status selected explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Some(Priority::default().as_str().to_owned()),
            status: Some(Status::default().as_str().to_owned()),
        }
    }
}

impl TaskDraft {
    /// Creates a minimal draft carrying only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the raw priority value.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the raw status value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw priority value, if set.
    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Returns the raw status value, if set.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the raw priority value.
    pub fn set_priority(&mut self, priority: impl Into<String>) {
        self.priority = Some(priority.into());
    }

    /// Replaces the raw status value.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Validates the draft into a normalized creation record.
    ///
    /// The title must be non-empty after trimming. Absent priority and
    /// status fall back to their defaults; present values must parse.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] naming the offending field.
    pub fn validate(&self) -> Result<NewTask, TaskDomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let priority = match self.priority.as_deref() {
            Some(raw) => Priority::try_from(raw)?,
            None => Priority::default(),
        };
        let status = match self.status.as_deref() {
            Some(raw) => Status::try_from(raw)?,
            None => Status::default(),
        };
        Ok(NewTask {
            title: title.to_owned(),
            description: self.description.clone(),
            priority,
            status,
        })
    }
}

/// Normalized creation record produced by [`TaskDraft::validate`].
///
/// Constructible only through validation, so a held value always satisfies
/// the at-rest invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    priority: Priority,
    status: Status,
}

impl NewTask {
    /// Returns the trimmed, non-empty title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the progress state.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

/// Raw partial-update payload; absent fields leave the stored task
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatchDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl TaskPatchDraft {
    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a raw replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets a raw replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Validates whichever fields are present.
    ///
    /// A present title must be non-empty after trimming; present priority
    /// and status values must parse. Absent fields stay absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] naming the offending field.
    pub fn validate(&self) -> Result<TaskPatch, TaskDomainError> {
        let title = match self.title.as_deref() {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(TaskDomainError::EmptyTitle);
                }
                Some(trimmed.to_owned())
            }
            None => None,
        };
        let priority = match self.priority.as_deref() {
            Some(raw) => Some(Priority::try_from(raw)?),
            None => None,
        };
        let status = match self.status.as_deref() {
            Some(raw) => Some(Status::try_from(raw)?),
            None => None,
        };
        Ok(TaskPatch {
            title,
            description: self.description.clone(),
            priority,
            status,
        })
    }
}

/// Validated partial update produced by [`TaskPatchDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
}

impl TaskPatch {
    /// Returns the replacement title, if supplied.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, if supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement priority, if supplied.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the replacement status, if supplied.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }
}
