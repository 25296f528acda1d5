//! Case-insensitive substring filter.
//!
//! # Invariants
//! - Filtering is stable: matches keep their input order.
//! - An empty query returns every item.
//! - The filter holds no state; same input always yields the same output.

use crate::model::activity::Activity;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Text accessor for one searchable field of `T`.
pub type FieldAccessor<T> = fn(&T) -> &str;

/// Fields matched against the header query for tasks.
pub const TASK_SEARCH_FIELDS: &[FieldAccessor<Task>] = &[task_title, task_assignee];

/// Fields matched against the header query for activities.
pub const ACTIVITY_SEARCH_FIELDS: &[FieldAccessor<Activity>] = &[activity_user, activity_action];

fn task_title(task: &Task) -> &str {
    &task.title
}

fn task_assignee(task: &Task) -> &str {
    &task.assignee
}

fn activity_user(activity: &Activity) -> &str {
    &activity.user
}

fn activity_action(activity: &Activity) -> &str {
    &activity.action
}

/// Which search box a query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    Header,
    Sidebar,
}

/// Captured search text for both inputs.
///
/// Only `header` drives the task and activity views. `sidebar` targets
/// member/project lists owned by presentation code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub header: String,
    pub sidebar: String,
}

impl SearchState {
    pub fn set(&mut self, scope: SearchScope, query: impl Into<String>) {
        let query = query.into();
        match scope {
            SearchScope::Header => self.header = query,
            SearchScope::Sidebar => self.sidebar = query,
        }
    }

    pub fn query(&self, scope: SearchScope) -> &str {
        match scope {
            SearchScope::Header => &self.header,
            SearchScope::Sidebar => &self.sidebar,
        }
    }
}

/// Returns whether any of `fields` contains `query`, ignoring case.
///
/// `needle` must already be lowercased.
fn matches_any<T>(item: &T, needle: &str, fields: &[FieldAccessor<T>]) -> bool {
    fields
        .iter()
        .any(|field| field(item).to_lowercase().contains(needle))
}

/// Keeps the items where any of `fields` contains `query`, ignoring case.
///
/// The query is matched verbatim (no trimming). Order is preserved.
pub fn filter_items<'a, T>(items: &'a [T], query: &str, fields: &[FieldAccessor<T>]) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_any(*item, &needle, fields))
        .collect()
}

/// Tasks matching `query` on title or assignee.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    filter_items(tasks, query, TASK_SEARCH_FIELDS)
}

/// Activities matching `query` on user or action.
pub fn filter_activities<'a>(activities: &'a [Activity], query: &str) -> Vec<&'a Activity> {
    filter_items(activities, query, ACTIVITY_SEARCH_FIELDS)
}
