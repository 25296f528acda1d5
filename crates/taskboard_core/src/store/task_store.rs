//! In-memory ordered task store.
//!
//! # Responsibility
//! - Hold the canonical sequence of tasks in board order.
//! - Resolve lane-relative drop positions into global sequence positions.
//! - Notify observers after every effective mutation.
//!
//! # Invariants
//! - Exactly one task per id.
//! - Write paths call `Task::validate()` before mutating.
//! - A failed operation leaves the sequence untouched.

use crate::model::task::{Task, TaskId, TaskStatus, TaskValidationError};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Task store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No task with this id exists. Arises from stale UI state.
    NotFound(TaskId),
    /// Seed data contains the same id twice.
    DuplicateId(TaskId),
    /// Record failed model validation.
    Validation(TaskValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Receives the canonical sequence after each effective store mutation.
pub trait StoreObserver {
    fn on_tasks_changed(&self, snapshot: &[Task]);
}

/// Canonical ordered task collection.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical collection with `seed`.
    ///
    /// # Errors
    /// - `Validation` when any seed task is invalid.
    /// - `DuplicateId` when two seed tasks share an id.
    pub fn initialize(&mut self, seed: Vec<Task>) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(seed.len());
        for task in &seed {
            task.validate()?;
            if !seen.insert(task.id.as_str()) {
                warn!(
                    "event=store_init module=store status=error reason=duplicate_id task_id={}",
                    task.id
                );
                return Err(StoreError::DuplicateId(task.id.clone()));
            }
        }

        self.tasks = seed;
        info!(
            "event=store_init module=store status=ok tasks={}",
            self.tasks.len()
        );
        self.notify();
        Ok(())
    }

    /// Moves a task into `destination` at lane position `destination_index`.
    ///
    /// The index counts tasks of `destination` status in the canonical
    /// sequence with the moved task removed. The task is inserted before the
    /// task currently holding that lane position, or appended to the end of
    /// the sequence when the index is past the lane's length.
    ///
    /// Moving a task to its current lane and lane position is a no-op.
    ///
    /// # Errors
    /// - `NotFound` when `task_id` is not in the store.
    pub fn move_task(
        &mut self,
        task_id: &str,
        destination: TaskStatus,
        destination_index: usize,
    ) -> StoreResult<()> {
        let Some(position) = self.position_of(task_id) else {
            warn!(
                "event=task_move module=store status=error reason=not_found task_id={task_id}"
            );
            return Err(StoreError::NotFound(task_id.to_string()));
        };

        let source = self.tasks[position].status;
        if source == destination && self.lane_index_at(position) == destination_index {
            debug!(
                "event=task_move module=store status=noop task_id={task_id} lane={destination} index={destination_index}"
            );
            return Ok(());
        }

        let mut task = self.tasks.remove(position);
        task.status = destination;
        let insert_at = self.global_position_for(destination, destination_index);
        self.tasks.insert(insert_at, task);

        info!(
            "event=task_move module=store status=ok task_id={task_id} from={source} to={destination} index={destination_index}"
        );
        self.notify();
        Ok(())
    }

    /// Replaces the task with the same id, keeping its position.
    ///
    /// # Errors
    /// - `Validation` when `updated` is invalid.
    /// - `NotFound` when no task has `updated.id`.
    pub fn update_task(&mut self, updated: Task) -> StoreResult<()> {
        updated.validate()?;

        let Some(slot) = self.tasks.iter_mut().find(|task| task.id == updated.id) else {
            warn!(
                "event=task_update module=store status=error reason=not_found task_id={}",
                updated.id
            );
            return Err(StoreError::NotFound(updated.id));
        };

        info!(
            "event=task_update module=store status=ok task_id={}",
            updated.id
        );
        *slot = updated;
        self.notify();
        Ok(())
    }

    /// Current canonical sequence.
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Tasks of one status, in canonical order.
    pub fn lane(&self, status: TaskStatus) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.status == status)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Registers an observer for future mutations.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    fn position_of(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }

    /// Lane index of the task at global `position` within its own lane.
    fn lane_index_at(&self, position: usize) -> usize {
        let status = self.tasks[position].status;
        self.tasks[..position]
            .iter()
            .filter(|task| task.status == status)
            .count()
    }

    fn global_position_for(&self, status: TaskStatus, lane_index: usize) -> usize {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.status == status)
            .nth(lane_index)
            .map(|(position, _)| position)
            .unwrap_or(self.tasks.len())
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_tasks_changed(&self.tasks);
        }
    }
}
