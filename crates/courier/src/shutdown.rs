// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signal handling for graceful shutdown.

use courier_core::CourierError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Cancel the returned token on SIGINT or SIGTERM (Ctrl+C only off Unix).
pub fn install_signal_handler() -> Result<CancellationToken, CourierError> {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    #[cfg(unix)]
    let mut sigterm = {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate()).map_err(|e| CourierError::Server {
            message: "failed to install SIGTERM handler".to_string(),
            source: Some(Box::new(e)),
        })?
    };

    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        tokio::select! {
            _ = ctrl_c => {
                info!("received SIGINT (Ctrl+C), initiating shutdown");
            }
            _ = sigterm.recv() => {
                info!("received SIGTERM, initiating shutdown");
            }
        }

        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received Ctrl+C, initiating shutdown");
        }

        token_clone.cancel();
        debug!("shutdown signal handler completed");
    });

    Ok(token)
}
