//! Board use-case services.
//!
//! # Responsibility
//! - Mediate UI events into task store mutations.
//! - Derive lane/activity views for presentation code.

pub mod board_service;
pub mod dashboard_service;
pub mod edit_session;
