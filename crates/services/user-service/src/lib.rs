//! User Service Library
//!
//! This crate provides user registry functionality: the in-memory record
//! store, the repository seam over it, and the use cases consumed by the
//! HTTP layer.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::{InMemoryUserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Build a ready-to-use user service backed by a fresh in-memory store.
///
/// When `seed` is set the store starts with the fixed demo records.
pub fn in_memory_service(seed: bool) -> Arc<dyn UserService> {
    let store = if seed {
        UserStore::seeded()
    } else {
        UserStore::new()
    };
    tracing::debug!(users = store.len(), "User store initialized");

    let repo = Arc::new(InMemoryUserRepository::new(store));
    Arc::new(UserManager::new(repo))
}
