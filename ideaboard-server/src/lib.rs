//! ideaboard-server: HTTP API for the idea board
//!
//! Clients post short text notes ("ideas") and read them back newest first.
//! Ideas live in a single PostgreSQL table.
//!
//! - `db`: connection pool, schema bootstrap, idea storage
//! - `http`: axum router, handlers, error responses
//! - `models`: validated request types

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, ensure_schema, DbError, Idea, IdeaStore, PgIdeaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
