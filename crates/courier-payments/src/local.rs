// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline payment provider.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use courier_core::{
    AdapterType, CourierError, HealthStatus, PaymentOrder, PaymentProvider, PluginAdapter,
};

/// Issues `order_<uuid>` handles without contacting any payment network.
pub struct LocalPaymentProvider {
    key_id: Option<String>,
}

impl LocalPaymentProvider {
    pub fn new(key_id: Option<String>) -> Self {
        Self { key_id }
    }
}

#[async_trait]
impl PluginAdapter for LocalPaymentProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Payment
    }

    async fn health_check(&self) -> Result<HealthStatus, CourierError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CourierError> {
        Ok(())
    }
}

#[async_trait]
impl PaymentProvider for LocalPaymentProvider {
    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    async fn create_order(
        &self,
        booking_id: &str,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentOrder, CourierError> {
        let order = PaymentOrder {
            order_id: format!("order_{}", Uuid::new_v4().simple()),
            amount: amount_minor,
            currency: currency.to_string(),
            receipt: format!("receipt_{booking_id}"),
            booking_id: booking_id.to_string(),
        };
        debug!(order_id = %order.order_id, booking_id, "local order issued");
        Ok(order)
    }
}
