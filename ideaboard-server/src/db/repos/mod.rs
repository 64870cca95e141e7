//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Scoped acquisition: one pooled connection or transaction per call
//! - Single statement per operation (INSERT ... RETURNING, no re-read)

pub mod ideas;

pub use ideas::{DbError, Idea, IdeaStore, PgIdeaStore};
