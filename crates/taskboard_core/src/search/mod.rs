//! Text search over board collections.
//!
//! # Responsibility
//! - Provide the pure substring filter used for task and activity views.
//! - Hold the captured header/sidebar query text.

pub mod filter;
