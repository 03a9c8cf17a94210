// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level Courier configuration.
///
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CourierConfig {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP listener, CORS, and static assets.
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Booking lifecycle settings.
    #[serde(default)]
    pub booking: BookingConfig,

    /// Payment provider settings.
    #[serde(default)]
    pub payments: PaymentsConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name reported by the root and health endpoints.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "courier".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix for every API route. Empty mounts routes at the root.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// CORS origins. Empty allows any origin without credentials;
    /// `"*"` is accepted as an explicit wildcard.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Serve the frontend from `assets_dir` as a fallback route.
    #[serde(default)]
    pub serve_assets: bool,

    /// Directory holding the static frontend.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_prefix: default_api_prefix(),
            allowed_origins: Vec::new(),
            serve_assets: false,
            assets_dir: default_assets_dir(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_assets_dir() -> String {
    "frontend".to_string()
}

fn default_body_limit_bytes() -> usize {
    10 * 1024 * 1024
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("courier").join("courier.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("courier.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Booking lifecycle configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Two upper-case letters that start every tracking number.
    #[serde(default = "default_tracking_prefix")]
    pub tracking_prefix: String,

    /// How many tracking numbers to try before giving up on a collision.
    #[serde(default = "default_max_tracking_attempts")]
    pub max_tracking_attempts: u32,

    /// Distance class assumed when a booking request names none.
    #[serde(default = "default_distance")]
    pub default_distance: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            tracking_prefix: default_tracking_prefix(),
            max_tracking_attempts: default_max_tracking_attempts(),
            default_distance: default_distance(),
        }
    }
}

fn default_tracking_prefix() -> String {
    "SC".to_string()
}

fn default_max_tracking_attempts() -> u32 {
    5
}

fn default_distance() -> String {
    "local".to_string()
}

/// Payment provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentsConfig {
    /// ISO 4217 currency used when an order request names none.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Public key id echoed to clients for the checkout widget.
    #[serde(default)]
    pub key_id: Option<String>,
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            key_id: None,
        }
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = CourierConfig::default();
        assert_eq!(config.service.name, "courier");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.api_prefix, "/api");
        assert!(config.server.allowed_origins.is_empty());
        assert!(!config.server.serve_assets);
        assert_eq!(config.booking.tracking_prefix, "SC");
        assert_eq!(config.booking.max_tracking_attempts, 5);
        assert_eq!(config.payments.currency, "INR");
        assert!(config.storage.database_path.ends_with("courier.db"));
    }

    #[test]
    fn defaults_serialize_to_toml() {
        let rendered = toml::to_string(&CourierConfig::default()).unwrap();
        assert!(rendered.contains("[server]"));
        assert!(rendered.contains("tracking_prefix = \"SC\""));
    }
}
