//! Core state logic for the project dashboard task board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::Activity;
pub use model::edit::TaskEdit;
pub use model::task::{Task, TaskId, TaskStatus, TaskValidationError};
pub use search::filter::{
    filter_activities, filter_items, filter_tasks, FieldAccessor, SearchScope, SearchState,
    ACTIVITY_SEARCH_FIELDS, TASK_SEARCH_FIELDS,
};
pub use seed::{load_seed_file, Seed, SeedError};
pub use service::board_service::{
    BoardError, BoardLanes, BoardService, DragOutcome, DragResult, LaneCounts,
};
pub use service::dashboard_service::{
    Dashboard, DashboardError, DashboardEvent, DashboardView, EditSessionView, EventOutcome,
    ViewObserver,
};
pub use service::edit_session::{EditSession, EditSessionState, SessionAction, SessionError};
pub use store::task_store::{StoreError, StoreObserver, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
