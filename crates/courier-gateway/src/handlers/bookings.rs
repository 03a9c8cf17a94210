// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `/bookings` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use courier_booking::input::parse_booking_status;
use courier_booking::NewBooking;
use courier_core::{Booking, BookingStatus, CourierError, HistoryEntry};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::server::GatewayState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: String,
    pub tracking_number: String,
    pub sender_name: String,
    pub receiver_name: String,
    pub status: BookingStatus,
    pub price: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub success: bool,
    pub message: &'static str,
    pub tracking_number: String,
    pub booking: BookingSummary,
}

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub success: bool,
    pub count: usize,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Serialize)]
pub struct BookingDetail {
    pub success: bool,
    pub booking: Booking,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub id: String,
    pub tracking_number: String,
    pub status: BookingStatus,
    pub tracking_history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub success: bool,
    pub message: &'static str,
    pub booking: StatusSnapshot,
}

#[derive(Debug, Serialize)]
pub struct Acknowledged {
    pub success: bool,
    pub message: &'static str,
}

/// POST /bookings
pub async fn create_booking(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<NewBooking>,
) -> Result<(StatusCode, Json<BookingCreated>), ApiError> {
    let booking = state
        .bookings
        .create(body)
        .await
        .map_err(ApiError::during("Error creating booking"))?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            success: true,
            message: "Booking created successfully",
            tracking_number: booking.tracking_number.clone(),
            booking: BookingSummary {
                id: booking.id,
                tracking_number: booking.tracking_number,
                sender_name: booking.sender_name,
                receiver_name: booking.receiver_name,
                status: booking.status,
                price: booking.price,
            },
        }),
    ))
}

/// GET /bookings
pub async fn list_bookings(
    State(state): State<GatewayState>,
) -> Result<Json<BookingList>, ApiError> {
    let bookings = state
        .bookings
        .list()
        .await
        .map_err(ApiError::during("Error fetching bookings"))?;
    Ok(Json(BookingList {
        success: true,
        count: bookings.len(),
        bookings,
    }))
}

/// GET /bookings/track/{tracking_number}
pub async fn track_booking(
    State(state): State<GatewayState>,
    Path(tracking_number): Path<String>,
) -> Result<Json<BookingDetail>, ApiError> {
    let booking = state
        .bookings
        .find_by_tracking_number(&tracking_number)
        .await
        .map_err(ApiError::during("Error tracking package"))?;
    Ok(Json(BookingDetail {
        success: true,
        booking,
    }))
}

/// GET /bookings/{id}
pub async fn get_booking(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<BookingDetail>, ApiError> {
    let booking = state
        .bookings
        .get(&id)
        .await
        .map_err(ApiError::during("Error fetching booking"))?;
    Ok(Json(BookingDetail {
        success: true,
        booking,
    }))
}

/// PUT /bookings/{id}/status
pub async fn update_status(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<StatusUpdateRequest>,
) -> Result<Json<StatusUpdated>, ApiError> {
    const ACTION: &str = "Error updating status";

    let status = match body.status.as_deref() {
        Some(raw) => parse_booking_status(raw).map_err(ApiError::during(ACTION))?,
        None => {
            return Err(ApiError::new(
                CourierError::validation(vec!["status".to_string()]),
                ACTION,
            ));
        }
    };
    let booking = state
        .bookings
        .transition(&id, status, body.location, body.description)
        .await
        .map_err(ApiError::during(ACTION))?;

    Ok(Json(StatusUpdated {
        success: true,
        message: "Status updated successfully",
        booking: StatusSnapshot {
            id: booking.id,
            tracking_number: booking.tracking_number,
            status: booking.status,
            tracking_history: booking.tracking_history,
        },
    }))
}

/// DELETE /bookings/{id}
pub async fn delete_booking(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledged>, ApiError> {
    state
        .bookings
        .delete(&id)
        .await
        .map_err(ApiError::during("Error deleting booking"))?;
    Ok(Json(Acknowledged {
        success: true,
        message: "Booking deleted successfully",
    }))
}
