//! Typed task field edits.
//!
//! A dialog field change arrives as `{ "field": ..., "value": ... }`; the
//! enum keeps the value type tied to the field it targets.

use crate::model::task::{validate_due_date, Task, TaskStatus, TaskValidationError};
use serde::{Deserialize, Serialize};

/// Single field change applied to a working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum TaskEdit {
    Title(String),
    Status(TaskStatus),
    Assignee(String),
    DueDate(String),
}

impl TaskEdit {
    /// Wire name of the edited field.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Status(_) => "status",
            Self::Assignee(_) => "assignee",
            Self::DueDate(_) => "dueDate",
        }
    }

    /// Applies the edit to `task` in place.
    ///
    /// The id is never touched. A malformed due date leaves `task` unchanged.
    pub fn apply_to(&self, task: &mut Task) -> Result<(), TaskValidationError> {
        match self {
            Self::Title(value) => task.title = value.clone(),
            Self::Status(value) => task.status = *value,
            Self::Assignee(value) => task.assignee = value.clone(),
            Self::DueDate(value) => {
                validate_due_date(value)?;
                task.due_date = value.clone();
            }
        }
        Ok(())
    }
}
