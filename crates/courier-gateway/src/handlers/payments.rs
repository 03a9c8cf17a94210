// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/payments` handlers: quotation, order creation, confirmation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use courier_booking::lenient_number;
use courier_core::{BookingStatus, CourierError, PaymentStatus};
use courier_payments::VerifyPayment;
use courier_quote::QuoteBreakdown;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::server::GatewayState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    pub package_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub package_weight: Option<f64>,
    pub distance: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub success: bool,
    pub cost: i64,
    pub breakdown: QuoteBreakdown,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub booking_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub success: bool,
    pub order_id: String,
    /// Minor units.
    pub amount: i64,
    pub currency: String,
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidBooking {
    pub id: String,
    pub tracking_number: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
pub struct PaymentVerified {
    pub success: bool,
    pub message: &'static str,
    pub booking: PaidBooking,
}

/// POST /payments/calculate-cost
pub async fn calculate_cost(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<CostRequest>,
) -> Result<Json<CostResponse>, ApiError> {
    let mut bad = Vec::new();
    let package_type = body
        .package_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if package_type.is_none() {
        bad.push("packageType".to_string());
    }
    let weight = body.package_weight.filter(|w| w.is_finite() && *w >= 0.0);
    if weight.is_none() {
        bad.push("packageWeight".to_string());
    }
    let (Some(package_type), Some(weight)) = (package_type, weight) else {
        return Err(ApiError::new(
            CourierError::validation(bad),
            "Error calculating cost",
        ));
    };

    let distance = body
        .distance
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(state.default_distance.as_str());
    let quote = courier_quote::calculate(weight, package_type, distance);
    Ok(Json(CostResponse {
        success: true,
        cost: quote.total,
        breakdown: quote.breakdown,
    }))
}

/// POST /payments/create-order
pub async fn create_order(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<OrderRequest>,
) -> Result<Json<OrderCreated>, ApiError> {
    let order = state
        .payments
        .create_order(
            body.booking_id.as_deref().unwrap_or_default(),
            body.amount.unwrap_or(f64::NAN),
            body.currency.as_deref(),
        )
        .await
        .map_err(ApiError::during("Error creating payment order"))?;
    Ok(Json(OrderCreated {
        success: true,
        order_id: order.order_id,
        amount: order.amount,
        currency: order.currency,
        key: state.payments.key_id().map(str::to_string),
    }))
}

/// POST /payments/verify-payment
pub async fn verify_payment(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<VerifyPayment>,
) -> Result<Json<PaymentVerified>, ApiError> {
    let booking = state
        .payments
        .verify_payment(body)
        .await
        .map_err(ApiError::during("Payment verification failed"))?;
    Ok(Json(PaymentVerified {
        success: true,
        message: "Payment verified successfully",
        booking: PaidBooking {
            id: booking.id,
            tracking_number: booking.tracking_number,
            status: booking.status,
            payment_status: booking.payment_status,
        },
    }))
}
