//! Board controller.
//!
//! # Responsibility
//! - Turn completed drag results into task store moves.
//! - Group the filtered task view into the three status lanes.
//!
//! # Invariants
//! - Drag indices are positions in the *visible* (filtered) lane and are
//!   translated to canonical lane positions before the store is touched.
//! - A drag without a destination never mutates the store.

use crate::model::task::{Task, TaskId, TaskStatus};
use crate::search::filter::filter_tasks;
use crate::store::task_store::{StoreError, TaskStore};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Terminal drag event reported by the host drag-and-drop layer.
///
/// A destination exists only when both `destination_status` and
/// `destination_index` are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub source_status: TaskStatus,
    pub source_index: usize,
    #[serde(default)]
    pub destination_status: Option<TaskStatus>,
    #[serde(default)]
    pub destination_index: Option<usize>,
}

impl DragResult {
    /// Drop inside a lane.
    pub fn dropped(
        source_status: TaskStatus,
        source_index: usize,
        destination_status: TaskStatus,
        destination_index: usize,
    ) -> Self {
        Self {
            source_status,
            source_index,
            destination_status: Some(destination_status),
            destination_index: Some(destination_index),
        }
    }

    /// Drag released outside every lane.
    pub fn cancelled(source_status: TaskStatus, source_index: usize) -> Self {
        Self {
            source_status,
            source_index,
            destination_status: None,
            destination_index: None,
        }
    }

    pub fn destination(&self) -> Option<(TaskStatus, usize)> {
        Some((self.destination_status?, self.destination_index?))
    }
}

/// Result of handling one drag event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Task moved in the store.
    Moved {
        task_id: TaskId,
        status: TaskStatus,
    },
    /// Dropped on its own slot; nothing to do.
    Unchanged { task_id: TaskId },
    /// No destination; the drag was cancelled.
    Cancelled,
}

/// Board controller error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The visible source lane has no task at the given index.
    SourceNotFound { status: TaskStatus, index: usize },
    /// Store rejected the move.
    Store(StoreError),
}

impl BoardError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. } | Self::Store(StoreError::NotFound(_))
        )
    }
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceNotFound { status, index } => {
                write!(f, "no visible task at index {index} of lane `{status}`")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::SourceNotFound { .. } => None,
        }
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Tasks grouped by lane, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLanes {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl BoardLanes {
    /// Partitions `tasks` by status, keeping their relative order.
    pub fn group<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut lanes = Self::default();
        for task in tasks {
            lanes.lane_mut(task.status).push(task.clone());
        }
        lanes
    }

    pub fn lane(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn lane_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    pub fn counts(&self) -> LaneCounts {
        LaneCounts {
            todo: self.todo.len(),
            in_progress: self.in_progress.len(),
            done: self.done.len(),
        }
    }
}

/// Visible task count per lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl LaneCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

/// Drag/lane facade over the canonical task store.
pub struct BoardService {
    store: TaskStore,
}

impl BoardService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Applies a drag result computed against the lanes visible for `query`.
    ///
    /// # Errors
    /// - `SourceNotFound` when the source index has no visible task.
    /// - `Store` when the store rejects the move.
    pub fn apply_drag(
        &mut self,
        drag: &DragResult,
        query: &str,
    ) -> Result<DragOutcome, BoardError> {
        let Some((destination, destination_index)) = drag.destination() else {
            debug!(
                "event=drag_end module=board status=cancelled lane={} index={}",
                drag.source_status, drag.source_index
            );
            return Ok(DragOutcome::Cancelled);
        };

        let task_id = self
            .visible_lane_ids(drag.source_status, query)
            .into_iter()
            .nth(drag.source_index)
            .ok_or_else(|| {
                warn!(
                    "event=drag_end module=board status=error reason=stale_source lane={} index={}",
                    drag.source_status, drag.source_index
                );
                BoardError::SourceNotFound {
                    status: drag.source_status,
                    index: drag.source_index,
                }
            })?;

        if drag.source_status == destination && drag.source_index == destination_index {
            return Ok(DragOutcome::Unchanged { task_id });
        }

        let canonical_index =
            self.canonical_lane_index(&task_id, destination, destination_index, query);
        self.store.move_task(&task_id, destination, canonical_index)?;

        Ok(DragOutcome::Moved {
            task_id,
            status: destination,
        })
    }

    /// Filtered tasks grouped into lanes.
    pub fn lanes(&self, query: &str) -> BoardLanes {
        BoardLanes::group(filter_tasks(self.store.snapshot(), query))
    }

    fn visible_lane_ids(&self, status: TaskStatus, query: &str) -> Vec<TaskId> {
        filter_tasks(self.store.snapshot(), query)
            .into_iter()
            .filter(|task| task.status == status)
            .map(|task| task.id.clone())
            .collect()
    }

    /// Maps a visible drop index to a canonical lane index.
    ///
    /// Both lanes are considered with the moved task taken out. The task
    /// lands before the visible task at `visible_index`; past the visible
    /// end it lands right after the last visible task of that lane.
    fn canonical_lane_index(
        &self,
        moved_id: &str,
        status: TaskStatus,
        visible_index: usize,
        query: &str,
    ) -> usize {
        let visible: Vec<TaskId> = self
            .visible_lane_ids(status, query)
            .into_iter()
            .filter(|id| id != moved_id)
            .collect();
        let canonical: Vec<&str> = self
            .store
            .lane(status)
            .filter(|task| task.id != moved_id)
            .map(|task| task.id.as_str())
            .collect();
        let position_of = |id: &str| canonical.iter().position(|candidate| *candidate == id);

        if let Some(anchor) = visible.get(visible_index) {
            return position_of(anchor.as_str()).unwrap_or(canonical.len());
        }
        match visible.last() {
            Some(last) => position_of(last.as_str()).map_or(canonical.len(), |position| position + 1),
            None => canonical.len(),
        }
    }
}
