//! User service configuration.

use std::env;

const DEFAULT_SEED_PATH: &str = "users.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// JSON file the in-memory store is loaded from
    pub seed_path: String,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_path: env::var("USER_SERVICE_SEED_PATH")
                .unwrap_or_else(|_| DEFAULT_SEED_PATH.to_string()),
            log_level: env::var("USER_SERVICE_LOG_LEVEL")
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Override the seed path (e.g. from a CLI flag)
    pub fn with_seed_path(mut self, seed_path: Option<String>) -> Self {
        if let Some(path) = seed_path {
            self.seed_path = path;
        }
        self
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            seed_path: DEFAULT_SEED_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
