//! The placeholder validation engine.

pub mod context;
pub mod discard;
pub mod error;
mod keys;
pub mod leftover;

pub use context::ValidationContext;
pub use discard::discard;
pub use error::ValidationError;
pub use leftover::check_none;
