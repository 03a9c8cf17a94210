// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Covers constraints serde cannot express: address shapes, prefix formats,
//! and numeric lower bounds.

use crate::diagnostic::ConfigError;
use crate::model::CourierConfig;

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &CourierConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            fail(format!(
                "server.host `{host}` is not a valid IP address or hostname"
            ));
        }
    }

    if config.server.port == 0 {
        fail("server.port must be non-zero".to_string());
    }

    let prefix = &config.server.api_prefix;
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        fail(format!(
            "server.api_prefix `{prefix}` must start with `/` and must not end with `/`"
        ));
    }

    for origin in &config.server.allowed_origins {
        let ok = origin == "*" || origin.starts_with("http://") || origin.starts_with("https://");
        if !ok {
            fail(format!(
                "server.allowed_origins entry `{origin}` must be `*` or an http(s) origin"
            ));
        }
    }

    if config.server.serve_assets && config.server.assets_dir.trim().is_empty() {
        fail("server.assets_dir must not be empty when serve_assets is on".to_string());
    }

    if config.server.body_limit_bytes == 0 {
        fail("server.body_limit_bytes must be greater than zero".to_string());
    }

    if config.storage.database_path.trim().is_empty() {
        fail("storage.database_path must not be empty".to_string());
    }

    let tracking_prefix = &config.booking.tracking_prefix;
    if tracking_prefix.len() != 2 || !tracking_prefix.chars().all(|c| c.is_ascii_uppercase()) {
        fail(format!(
            "booking.tracking_prefix must be exactly two upper-case ASCII letters, got `{tracking_prefix}`"
        ));
    }

    if config.booking.max_tracking_attempts == 0 {
        fail("booking.max_tracking_attempts must be at least 1".to_string());
    }

    if config.booking.default_distance.trim().is_empty() {
        fail("booking.default_distance must not be empty".to_string());
    }

    let currency = &config.payments.currency;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        fail(format!(
            "payments.currency must be a three-letter ISO 4217 code, got `{currency}`"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
