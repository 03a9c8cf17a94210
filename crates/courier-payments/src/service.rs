// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order creation and payment confirmation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use courier_booking::BookingManager;
use courier_config::model::PaymentsConfig;
use courier_core::{Booking, CourierError, PaymentOrder, PaymentProvider};

/// Payment confirmation sent back by the checkout widget.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPayment {
    pub order_id: Option<String>,
    pub payment_id: Option<String>,
    /// Accepted but not checked.
    pub signature: Option<String>,
    pub booking_id: Option<String>,
}

pub struct PaymentService {
    provider: Arc<dyn PaymentProvider>,
    bookings: Arc<BookingManager>,
    config: PaymentsConfig,
}

impl PaymentService {
    pub fn new(
        provider: Arc<dyn PaymentProvider>,
        bookings: Arc<BookingManager>,
        config: PaymentsConfig,
    ) -> Self {
        Self {
            provider,
            bookings,
            config,
        }
    }

    /// Public key id clients need for checkout, if configured.
    pub fn key_id(&self) -> Option<&str> {
        self.provider.key_id()
    }

    /// Create a provider order for `amount` major units.
    pub async fn create_order(
        &self,
        booking_id: &str,
        amount: f64,
        currency: Option<&str>,
    ) -> Result<PaymentOrder, CourierError> {
        let mut bad = Vec::new();
        if booking_id.trim().is_empty() {
            bad.push("bookingId".to_string());
        }
        if !amount.is_finite() || amount <= 0.0 {
            bad.push("amount".to_string());
        }
        if !bad.is_empty() {
            return Err(CourierError::validation(bad));
        }

        let currency = currency
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(self.config.currency.as_str())
            .to_ascii_uppercase();
        let amount_minor = (amount * 100.0).round() as i64;

        let order = self
            .provider
            .create_order(booking_id.trim(), amount_minor, &currency)
            .await?;
        info!(
            order_id = %order.order_id,
            booking_id = %order.booking_id,
            amount = order.amount,
            currency = %order.currency,
            provider = self.provider.name(),
            "payment order created"
        );
        Ok(order)
    }

    /// Mark the booking paid. The signature is not verified.
    pub async fn verify_payment(&self, request: VerifyPayment) -> Result<Booking, CourierError> {
        let field = |value: &Option<String>, name: &str, bad: &mut Vec<String>| {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => {
                    bad.push(name.to_string());
                    String::new()
                }
            }
        };
        let mut bad = Vec::new();
        let order_id = field(&request.order_id, "orderId", &mut bad);
        let payment_id = field(&request.payment_id, "paymentId", &mut bad);
        let booking_id = field(&request.booking_id, "bookingId", &mut bad);
        if !bad.is_empty() {
            return Err(CourierError::validation(bad));
        }

        debug!(
            order_id = %order_id,
            signature_present = request.signature.as_deref().is_some_and(|s| !s.is_empty()),
            "payment verification requested"
        );
        self.bookings
            .confirm_payment(&booking_id, &order_id, &payment_id)
            .await
    }
}
