//! Database layer - connection pool, schema, and idea storage
//!
//! - One pooled connection (or transaction) per operation, released on drop
//! - Schema is created idempotently at startup; there are no migrations
//! - Handlers see storage only through the `IdeaStore` trait

pub mod pool;
pub mod repos;
pub mod schema;

#[cfg(test)]
pub(crate) mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
