//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `User` record, its field bounds, and the explicit validation run
//! before any mutation of the registry.

pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserFields, UserId};
pub use validation::validate_user_fields;
