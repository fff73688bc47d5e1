//! Domain layer: mapping entities and replacement logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod mapping;

pub use entities::{expand_env_vars, ApplyOrder};
pub use error::{DomainError, DomainResult};
pub use mapping::Mapping;
