//! Domain models with validation at construction
//!
//! User input is validated when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod idea;
pub mod validation;

pub use idea::IdeaContent;
pub use validation::ValidationError;
