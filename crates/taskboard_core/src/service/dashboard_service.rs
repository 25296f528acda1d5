//! Dashboard owner for one board session.
//!
//! # Responsibility
//! - Own the task store, activity feed, search queries and edit session.
//! - Dispatch inbound UI events and recompute derived views after each one.
//! - Push the fresh view to registered observers.
//!
//! # Invariants
//! - This is the only writer of the task store.
//! - Every event runs to completion before the next one is handled.
//! - Recoverable errors never change canonical state and never panic.

use crate::model::activity::Activity;
use crate::model::edit::TaskEdit;
use crate::model::task::{Task, TaskId};
use crate::search::filter::{filter_activities, SearchScope, SearchState};
use crate::seed::Seed;
use crate::service::board_service::{
    BoardError, BoardLanes, BoardService, DragOutcome, DragResult, LaneCounts,
};
use crate::service::edit_session::{EditSession, EditSessionState, SessionError};
use crate::store::task_store::{StoreError, StoreObserver, TaskStore};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Inbound UI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DashboardEvent {
    DragResult(DragResult),
    SearchText {
        scope: SearchScope,
        query: String,
    },
    TaskSelect {
        #[serde(rename = "taskId")]
        task_id: TaskId,
    },
    /// Flattened `{ "field": ..., "value": ... }` under the event tag.
    TaskFieldEdit(TaskEdit),
    TaskSave,
    TaskCancel,
}

/// Dashboard-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Selected task id is not on the board.
    TaskNotFound(TaskId),
    Board(BoardError),
    Session(SessionError),
}

impl DashboardError {
    /// Stale UI state referenced a task that is not on the board.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::TaskNotFound(_) => true,
            Self::Board(err) => err.is_not_found(),
            Self::Session(SessionError::Store(StoreError::NotFound(_))) => true,
            Self::Session(_) => false,
        }
    }

    /// Edit/save/cancel arrived while no task was being edited.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::InvalidTransition(_))
        )
    }
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Board(err) => write!(f, "{err}"),
            Self::Session(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TaskNotFound(_) => None,
            Self::Board(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

impl From<BoardError> for DashboardError {
    fn from(value: BoardError) -> Self {
        Self::Board(value)
    }
}

impl From<SessionError> for DashboardError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

/// How one event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State changed, or the operation completed as a no-op move.
    Applied,
    /// Valid empty transition (cancelled drag).
    Ignored,
    /// Recoverable failure; canonical state is unchanged.
    Rejected(DashboardError),
}

/// Dialog-facing projection of the edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSessionView {
    pub state: EditSessionState,
    pub working_copy: Option<Task>,
}

/// Everything presentation code needs to render the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub lanes: BoardLanes,
    pub lane_counts: LaneCounts,
    pub activities: Vec<Activity>,
    pub search: SearchState,
    pub edit_session: EditSessionView,
}

/// Receives the recomputed view after every handled event.
pub trait ViewObserver {
    fn on_view_changed(&self, view: &DashboardView);
}

/// Home-level controller for the board session.
pub struct Dashboard {
    board: BoardService,
    activities: Vec<Activity>,
    search: SearchState,
    edit_session: EditSession,
    view: DashboardView,
    observers: Vec<Arc<dyn ViewObserver>>,
}

impl Dashboard {
    /// Creates a session from caller-supplied data.
    ///
    /// # Errors
    /// - Store validation errors for invalid or duplicate tasks.
    pub fn new(tasks: Vec<Task>, activities: Vec<Activity>) -> Result<Self, StoreError> {
        let mut store = TaskStore::new();
        store.initialize(tasks)?;

        let board = BoardService::new(store);
        let search = SearchState::default();
        let edit_session = EditSession::new();
        let view = compute_view(&board, &activities, &search, &edit_session);

        Ok(Self {
            board,
            activities,
            search,
            edit_session,
            view,
            observers: Vec::new(),
        })
    }

    pub fn from_seed(seed: Seed) -> Result<Self, StoreError> {
        Self::new(seed.tasks, seed.activities)
    }

    /// Creates a session from the built-in demo board.
    pub fn with_default_seed() -> Result<Self, StoreError> {
        Self::from_seed(Seed::builtin())
    }

    /// Dispatches one inbound event and refreshes the view.
    pub fn handle(&mut self, event: DashboardEvent) -> EventOutcome {
        let result = match event {
            DashboardEvent::DragResult(drag) => self.drag_end(&drag).map(|outcome| {
                if outcome == DragOutcome::Cancelled {
                    EventOutcome::Ignored
                } else {
                    EventOutcome::Applied
                }
            }),
            DashboardEvent::SearchText { scope, query } => {
                self.search(scope, query);
                Ok(EventOutcome::Applied)
            }
            DashboardEvent::TaskSelect { task_id } => {
                self.select_task(&task_id).map(|_| EventOutcome::Applied)
            }
            DashboardEvent::TaskFieldEdit(edit) => {
                self.edit_task(&edit).map(|_| EventOutcome::Applied)
            }
            DashboardEvent::TaskSave => self.save_task().map(|_| EventOutcome::Applied),
            DashboardEvent::TaskCancel => self.cancel_edit().map(|_| EventOutcome::Applied),
        };

        result.unwrap_or_else(|err| {
            warn!(
                "event=dashboard_event module=dashboard status=rejected error={}",
                err
            );
            EventOutcome::Rejected(err)
        })
    }

    /// Applies a completed drag.
    pub fn drag_end(&mut self, drag: &DragResult) -> Result<DragOutcome, DashboardError> {
        let outcome = self.board.apply_drag(drag, &self.search.header)?;
        self.refresh();
        Ok(outcome)
    }

    /// Captures search text for `scope`.
    pub fn search(&mut self, scope: SearchScope, query: impl Into<String>) {
        self.search.set(scope, query);
        debug!(
            "event=search module=dashboard status=ok scope={:?} query_len={}",
            scope,
            self.search.query(scope).chars().count()
        );
        self.refresh();
    }

    /// Opens the edit dialog on a copy of `task_id`.
    pub fn select_task(&mut self, task_id: &str) -> Result<(), DashboardError> {
        let Some(task) = self.board.store().get(task_id) else {
            return Err(DashboardError::TaskNotFound(task_id.to_string()));
        };
        self.edit_session.select(task);
        self.refresh();
        Ok(())
    }

    pub fn edit_task(&mut self, edit: &TaskEdit) -> Result<(), DashboardError> {
        self.edit_session.edit(edit)?;
        self.refresh();
        Ok(())
    }

    /// Commits the working copy; the dialog closes even if the commit fails.
    ///
    /// A save on a closed session is rejected without refreshing the view.
    pub fn save_task(&mut self) -> Result<Task, DashboardError> {
        let result = match self.edit_session.save(self.board.store_mut()) {
            Err(SessionError::InvalidTransition(action)) => {
                return Err(SessionError::InvalidTransition(action).into());
            }
            other => other,
        };
        self.refresh();
        Ok(result?)
    }

    pub fn cancel_edit(&mut self) -> Result<(), DashboardError> {
        self.edit_session.cancel()?;
        self.refresh();
        Ok(())
    }

    /// Last computed view.
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    /// Canonical task sequence.
    pub fn tasks(&self) -> &[Task] {
        self.board.store().snapshot()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit_session
    }

    pub fn subscribe_view(&mut self, observer: Arc<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    pub fn subscribe_store(&mut self, observer: Arc<dyn StoreObserver>) {
        self.board.store_mut().subscribe(observer);
    }

    fn refresh(&mut self) {
        self.view = compute_view(
            &self.board,
            &self.activities,
            &self.search,
            &self.edit_session,
        );
        for observer in &self.observers {
            observer.on_view_changed(&self.view);
        }
    }
}

fn compute_view(
    board: &BoardService,
    activities: &[Activity],
    search: &SearchState,
    edit_session: &EditSession,
) -> DashboardView {
    let lanes = board.lanes(&search.header);
    DashboardView {
        lane_counts: lanes.counts(),
        lanes,
        activities: filter_activities(activities, &search.header)
            .into_iter()
            .cloned()
            .collect(),
        search: search.clone(),
        edit_session: EditSessionView {
            state: edit_session.state(),
            working_copy: edit_session.working_copy().cloned(),
        },
    }
}
