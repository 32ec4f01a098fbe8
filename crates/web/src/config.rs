//! Registry server configuration.

use common::{env_flag, ServiceConfig};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8000;

/// Registry server configuration.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Bind address and logging settings
    pub service: ServiceConfig,
    /// Load the fixed demo users at startup
    pub seed_users: bool,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `REGISTRY_HOST`, `REGISTRY_PORT`, `REGISTRY_LOG_LEVEL` and
    /// `SEED_USERS`.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env("REGISTRY", Self::default().service),
            seed_users: env_flag("SEED_USERS", true),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        self.service.server_addr()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-registry".to_string(),
                port: DEFAULT_PORT,
                ..ServiceConfig::default()
            },
            seed_users: true,
        }
    }
}
