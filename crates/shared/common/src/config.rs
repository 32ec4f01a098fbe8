//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load `{PREFIX}_HOST`, `{PREFIX}_PORT` and `{PREFIX}_LOG_LEVEL`,
    /// falling back to `defaults` for anything unset or unparsable.
    ///
    /// Reads `.env` first if one is present.
    pub fn from_env(prefix: &str, defaults: ServiceConfig) -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var(format!("{}_LOG_LEVEL", prefix)).unwrap_or(defaults.log_level),
            service_name: defaults.service_name,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a boolean environment flag (`1`/`true`/`yes`/`on`, case-insensitive).
pub fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}
