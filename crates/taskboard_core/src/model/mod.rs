//! Board domain model.
//!
//! # Responsibility
//! - Define value records for tasks, activities and task field edits.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Records are owned values; no component aliases another's copy.

pub mod activity;
pub mod edit;
pub mod task;
