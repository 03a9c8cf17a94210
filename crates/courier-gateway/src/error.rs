// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from service errors to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use courier_core::CourierError;

/// Failure envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A handler error: the underlying cause plus what the handler was doing.
///
/// Server-side causes are logged and replaced by a generic message so that
/// internals never reach the client.
#[derive(Debug)]
pub struct ApiError {
    cause: CourierError,
    action: &'static str,
}

impl ApiError {
    /// `action` becomes the message on 500 responses, e.g. "Error creating booking".
    pub fn new(cause: CourierError, action: &'static str) -> Self {
        Self { cause, action }
    }

    /// Adapter for `map_err`.
    pub fn during(action: &'static str) -> impl FnOnce(CourierError) -> Self {
        move |cause| Self::new(cause, action)
    }

    pub fn status_code(&self) -> StatusCode {
        match &self.cause {
            CourierError::Validation { .. } => StatusCode::BAD_REQUEST,
            CourierError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            CourierError::Validation {
                fields: Vec::new(),
                message: rejection.body_text(),
            },
            "Invalid request body",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self.cause {
            CourierError::Validation { message, .. } => ErrorBody {
                success: false,
                message: "Validation failed".to_string(),
                error: Some(message),
            },
            CourierError::NotFound { entity, .. } => ErrorBody {
                success: false,
                message: not_found_message(entity),
                error: None,
            },
            cause => {
                error!(error = %cause, action = self.action, "request failed");
                ErrorBody {
                    success: false,
                    message: self.action.to_string(),
                    error: Some("internal server error".to_string()),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

/// "tracking number" becomes "Tracking number not found".
fn not_found_message(entity: &str) -> String {
    let mut chars = entity.chars();
    match chars.next() {
        Some(first) => format!("{}{} not found", first.to_uppercase(), chars.as_str()),
        None => "Not found".to_string(),
    }
}
