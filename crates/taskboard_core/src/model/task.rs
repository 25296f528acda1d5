//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shown on the board.
//! - Validate identity and due-date shape before a task enters the store.
//!
//! # Invariants
//! - `id` is non-blank and never changes once the task exists.
//! - `status` is always one of the three lane values.
//! - `due_date` is an ISO 8601 calendar date (`YYYY-MM-DD`).

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Stable task identifier.
///
/// Seed data uses short ids such as `"1"`; generated tasks use UUID strings.
pub type TaskId = String;

/// Board lane a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Lane order used for rendering.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Stable wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Parses a wire string back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Id is empty or whitespace only.
    BlankId,
    /// Due date is not a real `YYYY-MM-DD` calendar date.
    InvalidDueDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "task id must not be blank"),
            Self::InvalidDueDate(value) => {
                write!(f, "due date `{value}` is not an ISO 8601 calendar date")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Tasks are plain values: the store and the edit session each hold their
/// own copies and never share a mutable reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    /// Stable identity; survives reorders and edits.
    pub id: TaskId,
    /// Free-text title shown on the card.
    pub title: String,
    /// Lane the task belongs to.
    pub status: TaskStatus,
    /// Free-text assignee name.
    pub assignee: String,
    /// ISO 8601 calendar date, `YYYY-MM-DD`. Serialized as `dueDate`.
    pub due_date: String,
}

/// Unchecked wire form; converted through [`Task::validate`] on deserialize.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    title: String,
    status: TaskStatus,
    assignee: String,
    due_date: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: value.id,
            title: value.title,
            status: value.status,
            assignee: value.assignee,
            due_date: value.due_date,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Task {
    /// Creates a `todo` task with a generated UUID id.
    pub fn new(
        title: impl Into<String>,
        assignee: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(
            Uuid::new_v4().to_string(),
            title,
            TaskStatus::Todo,
            assignee,
            due_date,
        )
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by seed/import paths where identity already exists.
    pub fn with_id(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        status: TaskStatus,
        assignee: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            title: title.into(),
            status,
            assignee: assignee.into(),
            due_date: due_date.into(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - `BlankId` when `id` is empty after trim.
    /// - `InvalidDueDate` when `due_date` is not a real calendar date.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::BlankId);
        }
        validate_due_date(&self.due_date)
    }
}

/// Validates an ISO 8601 calendar date string (`YYYY-MM-DD`).
///
/// The shape must be exactly 4-2-2 digits; the date itself must exist.
pub fn validate_due_date(value: &str) -> Result<(), TaskValidationError> {
    if !ISO_DATE_RE.is_match(value) {
        return Err(TaskValidationError::InvalidDueDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| TaskValidationError::InvalidDueDate(value.to_string()))
}
