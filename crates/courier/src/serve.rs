// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `courier serve`: wire storage, services and the gateway, then run until
//! a shutdown signal arrives.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use courier_booking::{BookingManager, ContactService};
use courier_config::CourierConfig;
use courier_core::{CourierError, PluginAdapter, StorageAdapter};
use courier_gateway::{GatewayState, ServiceInfo};
use courier_payments::{LocalPaymentProvider, PaymentService};
use courier_storage::SqliteStorage;

use crate::shutdown;

pub async fn run_serve(config: CourierConfig) -> Result<(), CourierError> {
    init_tracing(&config.service.log_level);

    info!(
        name = %config.service.name,
        version = env!("CARGO_PKG_VERSION"),
        "starting courier serve"
    );

    let storage = Arc::new(SqliteStorage::new(config.storage.clone()));
    storage.initialize().await?;
    info!(path = %config.storage.database_path, "storage ready");

    let bookings = Arc::new(BookingManager::new(storage.clone(), config.booking.clone()));
    let contacts = Arc::new(ContactService::new(storage.clone()));
    let provider = Arc::new(LocalPaymentProvider::new(config.payments.key_id.clone()));
    let payments = Arc::new(PaymentService::new(
        provider.clone(),
        bookings.clone(),
        config.payments.clone(),
    ));
    info!(provider = provider.name(), "payment provider ready");

    let state = GatewayState {
        bookings,
        contacts,
        payments,
        storage: storage.clone(),
        default_distance: config.booking.default_distance.clone(),
        info: ServiceInfo {
            name: config.service.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_prefix: config.server.api_prefix.clone(),
            start_time: Instant::now(),
        },
    };

    let cancel = shutdown::install_signal_handler()?;
    let served = courier_gateway::start_server(&config.server, state, cancel).await;
    if let Err(e) = &served {
        error!(error = %e, "gateway stopped with an error");
    }

    let stopped = release(served, provider.as_ref(), storage.as_ref()).await;
    info!("courier stopped");
    stopped
}

/// Shut the provider down and close storage after the gateway has stopped.
///
/// A gateway error takes precedence; close failures are then only logged.
async fn release(
    served: Result<(), CourierError>,
    provider: &dyn PluginAdapter,
    storage: &dyn StorageAdapter,
) -> Result<(), CourierError> {
    let closed = match provider.shutdown().await {
        Ok(()) => storage.close().await,
        Err(e) => {
            if let Err(close_err) = storage.close().await {
                error!(error = %close_err, "failed to close storage");
            }
            Err(e)
        }
    };
    match (served, closed) {
        (Err(e), Err(close_err)) => {
            error!(error = %close_err, "shutdown failed after gateway error");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), closed) => closed,
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("courier={log_level},tower_http={log_level},warn"))
    });

    // try_init: a second call (tests) must not panic.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .try_init();
}
