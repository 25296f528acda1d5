//! Seed data for a fresh board session.
//!
//! # Responsibility
//! - Provide the built-in demo board used when the host supplies nothing.
//! - Load caller-supplied seed documents from JSON files.
//!
//! # Invariants
//! - Seed loading never panics; bad input surfaces as `SeedError`.
//! - Task records are validated during deserialization.

use crate::model::activity::Activity;
use crate::model::task::{Task, TaskStatus};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Seed document: `{ "tasks": [...], "activities": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Seed {
    /// Built-in demo board.
    pub fn builtin() -> Self {
        Self {
            tasks: default_tasks(),
            activities: default_activities(),
        }
    }
}

#[derive(Debug)]
pub enum SeedError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid seed file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Reads a seed document from a JSON file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Seed, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let seed: Seed = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "event=seed_load module=seed status=ok tasks={} activities={}",
        seed.tasks.len(),
        seed.activities.len()
    );
    Ok(seed)
}

fn seed_task(id: &str, title: &str, status: TaskStatus, assignee: &str, due_date: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        status,
        assignee: assignee.to_string(),
        due_date: due_date.to_string(),
    }
}

/// Demo tasks, one per lane.
pub fn default_tasks() -> Vec<Task> {
    vec![
        seed_task(
            "1",
            "Design System Implementation",
            TaskStatus::InProgress,
            "Alice Cooper",
            "2024-02-28",
        ),
        seed_task(
            "2",
            "User Research",
            TaskStatus::Todo,
            "Bob Wilson",
            "2024-03-05",
        ),
        seed_task(
            "3",
            "Frontend Development",
            TaskStatus::Done,
            "Carol Smith",
            "2024-02-25",
        ),
    ]
}

pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "1",
            "Alice Cooper",
            "completed task \"Design Review\"",
            "5 minutes ago",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Alice",
        ),
        Activity::new(
            "2",
            "Bob Wilson",
            "started working on \"API Integration\"",
            "1 hour ago",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Bob",
        ),
    ]
}
