//! Engine configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Nothing here is a global: the config is built once and
//! injected into the engine.

use serde::{Deserialize, Serialize};
use std::env;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory holding the JSON collection blobs
    pub data_dir: String,

    /// Shared login password (MVP auth model: one password, identity by
    /// office owner email)
    pub access_password: String,

    /// Email that logs in as the platform super admin
    pub super_admin_email: String,

    /// Display name for the super admin session
    pub super_admin_name: String,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        EngineConfig {
            data_dir: env::var("NEXO_DATA_DIR").unwrap_or_else(|_| "./nexo-data".to_string()),

            access_password: env::var("NEXO_ACCESS_PASSWORD")
                // Development default; production MUST set the variable
                .unwrap_or_else(|_| "123".to_string()),

            super_admin_email: env::var("NEXO_SUPER_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@nexo.app".to_string()),

            super_admin_name: env::var("NEXO_SUPER_ADMIN_NAME")
                .unwrap_or_else(|_| "Platform Admin".to_string()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            data_dir: "./nexo-data".to_string(),
            access_password: "123".to_string(),
            super_admin_email: "admin@nexo.app".to_string(),
            super_admin_name: "Platform Admin".to_string(),
        }
    }
}
