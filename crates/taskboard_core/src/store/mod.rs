//! Canonical task storage.
//!
//! # Responsibility
//! - Own the single ordered task sequence for the session.
//! - Expose move/update primitives and read snapshots.
//!
//! # Invariants
//! - Mutations never create or delete tasks; the id multiset is fixed after
//!   `initialize`.
//! - Store APIs return semantic errors (`NotFound`) instead of panicking.

pub mod task_store;
