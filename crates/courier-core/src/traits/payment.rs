// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment provider trait.

use async_trait::async_trait;

use crate::error::CourierError;
use crate::traits::adapter::PluginAdapter;
use crate::types::PaymentOrder;

/// An external payment provider that issues order handles.
#[async_trait]
pub trait PaymentProvider: PluginAdapter {
    /// Public key id that clients pass to the provider's checkout widget.
    fn key_id(&self) -> Option<&str>;

    /// Create an order for `amount_minor` units of `currency`.
    async fn create_order(
        &self,
        booking_id: &str,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentOrder, CourierError>;
}
