//! Repository layer for data access.

mod user_repository;
mod user_store;

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
pub use user_repository::{InMemoryUserRepository, UserRepository};
pub use user_store::UserStore;
