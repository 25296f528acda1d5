//! Task edit dialog session.
//!
//! # Responsibility
//! - Hold at most one working copy of a task under edit.
//! - Commit the working copy back into the task store on save.
//!
//! # Invariants
//! - The working copy is an owned clone; editing it never touches the store.
//! - `save` always closes the session, even when the commit fails.
//! - `edit`/`save`/`cancel` on a closed session have no effect.

use crate::model::edit::TaskEdit;
use crate::model::task::{Task, TaskValidationError};
use crate::store::task_store::{StoreError, TaskStore};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditSessionState {
    Closed,
    OpenClean,
    OpenDirty,
}

/// Session operation that requires an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Edit,
    Save,
    Cancel,
}

impl SessionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Save => "save",
            Self::Cancel => "cancel",
        }
    }
}

/// Edit session error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operation arrived while the session is closed.
    InvalidTransition(SessionAction),
    /// Field value rejected; working copy unchanged.
    InvalidField(TaskValidationError),
    /// Commit failed in the store; the session is closed anyway.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition(action) => {
                write!(f, "cannot {} while no task is being edited", action.as_str())
            }
            Self::InvalidField(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidTransition(_) => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

#[derive(Debug, Clone)]
struct OpenEdit {
    loaded: Task,
    working: Task,
}

/// At-most-one task edit session.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    open: Option<OpenEdit>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditSessionState {
        match &self.open {
            None => EditSessionState::Closed,
            Some(open) if open.loaded == open.working => EditSessionState::OpenClean,
            Some(_) => EditSessionState::OpenDirty,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Draft being edited, if any.
    pub fn working_copy(&self) -> Option<&Task> {
        self.open.as_ref().map(|open| &open.working)
    }

    /// Loads a copy of `task` into the session.
    ///
    /// Selecting while already open re-targets the session and drops the
    /// previous draft.
    pub fn select(&mut self, task: &Task) {
        if let Some(previous) = &self.open {
            debug!(
                "event=edit_select module=edit_session status=retarget from={} to={}",
                previous.working.id, task.id
            );
        }
        self.open = Some(OpenEdit {
            loaded: task.clone(),
            working: task.clone(),
        });
        debug!(
            "event=edit_select module=edit_session status=ok task_id={}",
            task.id
        );
    }

    /// Applies one field change to the working copy.
    ///
    /// # Errors
    /// - `InvalidTransition` when closed.
    /// - `InvalidField` when the value is rejected.
    pub fn edit(&mut self, change: &TaskEdit) -> Result<(), SessionError> {
        let open = self.open_or_reject(SessionAction::Edit)?;
        change
            .apply_to(&mut open.working)
            .map_err(SessionError::InvalidField)
    }

    /// Discards the working copy.
    ///
    /// # Errors
    /// - `InvalidTransition` when closed.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.open_or_reject(SessionAction::Cancel)?;
        self.open = None;
        debug!("event=edit_cancel module=edit_session status=ok");
        Ok(())
    }

    /// Commits the working copy into `store` and closes the session.
    ///
    /// Returns the committed task.
    ///
    /// # Errors
    /// - `InvalidTransition` when closed.
    /// - `Store` when the store rejects the update; the session is still
    ///   closed.
    pub fn save(&mut self, store: &mut TaskStore) -> Result<Task, SessionError> {
        let committed = self.open_or_reject(SessionAction::Save)?.working.clone();
        self.open = None;

        store.update_task(committed.clone())?;
        info!(
            "event=edit_save module=edit_session status=ok task_id={}",
            committed.id
        );
        Ok(committed)
    }

    fn open_or_reject(&mut self, action: SessionAction) -> Result<&mut OpenEdit, SessionError> {
        self.open.as_mut().ok_or_else(|| {
            warn!(
                "event=edit_{} module=edit_session status=rejected reason=closed",
                action.as_str()
            );
            SessionError::InvalidTransition(action)
        })
    }
}
