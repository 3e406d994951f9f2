//! Task aggregate root and its enumerated field types.

use super::{NewTask, TaskDomainError, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Default urgency for tasks created without an explicit level.
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskDomainError::InvalidPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task progress state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Work has not started. Default for new tasks.
    #[default]
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl Status {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(TaskDomainError::InvalidStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task aggregate root.
///
/// Serialises to the wire shape
/// `{id, title, description, priority, status, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: Priority,
    status: Status,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a stored task from a validated creation record.
    ///
    /// Assigns a fresh identifier and reads the creation timestamp from
    /// `clock`; both are immutable afterwards.
    #[must_use]
    pub fn create(record: &NewTask, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: record.title().to_owned(),
            description: record.description().to_owned(),
            priority: record.priority(),
            status: record.status(),
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task progress state.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies the supplied fields of a validated patch.
    ///
    /// Fields absent from the patch retain their prior values; `id` and
    /// `created_at` are never touched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = patch.title() {
            self.title = title.to_owned();
        }
        if let Some(description) = patch.description() {
            self.description = description.to_owned();
        }
        if let Some(priority) = patch.priority() {
            self.priority = priority;
        }
        if let Some(status) = patch.status() {
            self.status = status;
        }
    }
}
