// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use courier_booking::{BookingManager, ContactService};
use courier_config::model::ServerConfig;
use courier_core::{CourierError, StorageAdapter};
use courier_payments::PaymentService;

use crate::handlers::{bookings, contact, payments, system};

/// Identity reported by the health and banner endpoints.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub api_prefix: String,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub bookings: Arc<BookingManager>,
    pub contacts: Arc<ContactService>,
    pub payments: Arc<PaymentService>,
    /// Checked by the health endpoint.
    pub storage: Arc<dyn StorageAdapter>,
    /// Distance class for quotes that name none.
    pub default_distance: String,
    pub info: ServiceInfo,
}

/// Build the full application router.
///
/// API routes are nested under `config.api_prefix`; `/health` is also
/// served at the root. With `serve_assets` the asset directory becomes
/// the fallback, otherwise `/` returns the service banner.
pub fn build_router(config: &ServerConfig, state: GatewayState) -> Router {
    let api = Router::new()
        .route(
            "/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route(
            "/bookings/track/{tracking_number}",
            get(bookings::track_booking),
        )
        .route(
            "/bookings/{id}",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        .route("/bookings/{id}/status", put(bookings::update_status))
        .route(
            "/contact",
            post(contact::submit_contact).get(contact::list_contacts),
        )
        .route("/contact/{id}", get(contact::get_contact))
        .route("/contact/{id}/status", put(contact::update_contact_status))
        .route("/payments/calculate-cost", post(payments::calculate_cost))
        .route("/payments/create-order", post(payments::create_order))
        .route("/payments/verify-payment", post(payments::verify_payment));

    let prefix = config.api_prefix.trim_end_matches('/');
    let mut app = if prefix.is_empty() {
        api.route("/health", get(system::health))
    } else {
        Router::new()
            .nest(prefix, api.route("/health", get(system::health)))
            .route("/health", get(system::health))
    };

    app = if config.serve_assets {
        app.fallback_service(ServeDir::new(&config.assets_dir))
    } else {
        app.route("/", get(system::banner))
    };

    app.layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy from configured origins.
///
/// Empty list: permissive. `"*"`: any origin, no credentials. Otherwise the
/// listed origins only, with credentials allowed.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        HeaderName::from_static("x-requested-with"),
    ];
    let base = CorsLayer::new().allow_methods(methods).allow_headers(headers);

    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

/// Bind and serve until `shutdown` is cancelled, then drain in-flight requests.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), CourierError> {
    let app = build_router(config, state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CourierError::Server {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| CourierError::Server {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    info!("gateway server stopped");
    Ok(())
}
