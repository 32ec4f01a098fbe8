//! Application state for dependency injection.

use std::sync::Arc;

use user_service_lib::in_memory_service;
use user_service_lib::service::UserService;

use crate::config::RegistryConfig;

/// Application state shared across handlers.
///
/// Owns the user registry for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub config: RegistryConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, config: RegistryConfig) -> Self {
        Self {
            user_service,
            config,
        }
    }

    /// Create app state with a fresh in-memory registry, seeded per `config`.
    pub fn in_memory(config: RegistryConfig) -> Self {
        let user_service = in_memory_service(config.seed_users);
        Self::new(user_service, config)
    }
}
