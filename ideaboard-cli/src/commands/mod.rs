//! Command implementations for the ideaboard CLI

pub mod serve;

pub use serve::run_serve;
