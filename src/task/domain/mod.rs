//! Domain model for the task resource.
//!
//! The task domain models the sole managed entity — a title-bearing work
//! item with priority and progress state — together with the validation
//! that turns raw client payloads into normalized records, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod task;

pub use draft::{NewTask, TaskDraft, TaskPatch, TaskPatchDraft};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{Priority, Status, Task};
