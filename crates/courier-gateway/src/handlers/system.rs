// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health and service banner.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use courier_core::time::now_timestamp;
use courier_core::HealthStatus;

use crate::server::GatewayState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: String,
    pub uptime_secs: u64,
    pub database: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct Banner {
    pub success: bool,
    pub message: String,
    pub status: &'static str,
    pub version: String,
    pub timestamp: String,
    pub routes: Vec<String>,
}

/// GET /health
///
/// Always 200; storage trouble shows up in the `database` field.
pub async fn health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let database = match state.storage.health_check().await {
        Ok(HealthStatus::Healthy) => "Connected",
        Ok(HealthStatus::Degraded(reason)) => {
            warn!(reason = %reason, "storage degraded");
            "Degraded"
        }
        Ok(HealthStatus::Unhealthy(reason)) => {
            warn!(reason = %reason, "storage unhealthy");
            "Disconnected"
        }
        Err(e) => {
            warn!(error = %e, "storage health check failed");
            "Disconnected"
        }
    };

    Json(HealthResponse {
        success: true,
        status: "OK",
        version: state.info.version.clone(),
        uptime_secs: state.info.start_time.elapsed().as_secs(),
        database,
        timestamp: now_timestamp(),
    })
}

/// GET /
pub async fn banner(State(state): State<GatewayState>) -> Json<Banner> {
    let prefix = &state.info.api_prefix;
    let routes = [
        "GET    /health",
        "POST   /bookings",
        "GET    /bookings",
        "GET    /bookings/track/{trackingNumber}",
        "GET    /bookings/{id}",
        "PUT    /bookings/{id}/status",
        "DELETE /bookings/{id}",
        "POST   /contact",
        "GET    /contact",
        "GET    /contact/{id}",
        "PUT    /contact/{id}/status",
        "POST   /payments/calculate-cost",
        "POST   /payments/create-order",
        "POST   /payments/verify-payment",
    ]
    .iter()
    .map(|route| match route.split_once('/') {
        Some((method, path)) => format!("{method}{prefix}/{path}"),
        None => route.to_string(),
    })
    .collect();

    Json(Banner {
        success: true,
        message: format!("{} API service is running", state.info.name),
        status: "success",
        version: state.info.version.clone(),
        timestamp: now_timestamp(),
        routes,
    })
}
