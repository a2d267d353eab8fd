//! Kanban task model.
//!
//! # Responsibility
//! - Define the card record that moves between board columns.
//! - Validate task input coming from the add-task form.
//!
//! # Invariants
//! - `id` is stable for the whole task lifetime; moves never rewrite it.
//! - `content` is never blank once a task is accepted onto a board.
//! - `assignee` is either `None` or a trimmed, non-empty name.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable task identifier.
///
/// Seed tasks use short ids (`task-1`); generated ids are `task-<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps a caller-provided id string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id for a task created at runtime.
    pub fn generate() -> Self {
        Self(format!("task-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Task urgency shown as a badge on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    /// Add-task form default.
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Validation failures for task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Content is empty after trimming whitespace.
    BlankContent,
    /// A task with the same id is already on the board.
    DuplicateId(TaskId),
    /// Assignee is present but blank or padded with whitespace.
    UnnormalizedAssignee,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankContent => write!(f, "task content must not be blank"),
            Self::DuplicateId(id) => write!(f, "task id already on board: {id}"),
            Self::UnnormalizedAssignee => {
                write!(f, "task assignee must be trimmed and non-empty")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// A single kanban card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl Task {
    /// Creates an unassigned task.
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            priority,
            assignee: None,
        }
    }

    /// Sets the assignee, normalizing blank names to `None`.
    pub fn with_assignee(mut self, assignee: impl AsRef<str>) -> Self {
        self.assignee = normalize_assignee(Some(assignee.as_ref()));
        self
    }

    /// Validates fields that must hold before the task joins a board.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.content.trim().is_empty() {
            return Err(TaskValidationError::BlankContent);
        }
        if let Some(assignee) = self.assignee.as_deref() {
            if assignee.is_empty() || assignee.trim() != assignee {
                return Err(TaskValidationError::UnnormalizedAssignee);
            }
        }
        Ok(())
    }
}

/// Trims an optional assignee and drops it when nothing is left.
pub fn normalize_assignee(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
