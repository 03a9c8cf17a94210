// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Courier booking service.

use thiserror::Error;

/// The primary error type used across all Courier traits and core operations.
#[derive(Debug, Error)]
pub enum CourierError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller input failed validation. `fields` names every offending field.
    #[error("validation failed: {message}")]
    Validation {
        fields: Vec<String>,
        message: String,
    },

    /// No record exists for the given identifier or tracking number.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The store rejected a tracking number because it is already taken.
    #[error("tracking number already exists: {0}")]
    DuplicateTrackingNumber(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Payment provider errors (order creation, confirmation).
    #[error("payment error: {message}")]
    Payment {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP server errors (bind failure, serve loop exit).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CourierError {
    /// Build a validation error naming the given fields.
    pub fn validation(fields: Vec<String>) -> Self {
        let message = format!("missing or invalid field(s): {}", fields.join(", "));
        Self::Validation { fields, message }
    }

    /// Returns true for errors that mean "no such record".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
