// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking lifecycle manager.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use courier_config::model::BookingConfig;
use courier_core::time::{format_timestamp, now_timestamp};
use courier_core::{
    Booking, BookingStatus, BookingStore, CourierError, HistoryEntry, PaymentConfirmation,
    PaymentStatus, StatusChange,
};

use crate::input::NewBooking;
use crate::tracking::{generate_tracking_number, normalize};

const SEED_LOCATION: &str = "Processing request";
const SEED_DESCRIPTION: &str = "Booking created successfully";

/// Creates, tracks, transitions and removes bookings.
///
/// Every mutation stamps `updated_at` here before calling the store; the
/// store never invents timestamps.
pub struct BookingManager {
    store: Arc<dyn BookingStore>,
    config: BookingConfig,
}

impl BookingManager {
    pub fn new(store: Arc<dyn BookingStore>, config: BookingConfig) -> Self {
        Self { store, config }
    }

    /// Validate the request, price it, and persist a new `pending` booking.
    ///
    /// A tracking-number collision reported by the store triggers a fresh
    /// number, up to `max_tracking_attempts` tries in total.
    pub async fn create(&self, input: NewBooking) -> Result<Booking, CourierError> {
        let valid = input.validate()?;
        let distance = valid
            .distance
            .unwrap_or_else(|| self.config.default_distance.clone());
        let quote = courier_quote::calculate(
            valid.package_weight,
            &valid.package_type.to_string(),
            &distance,
        );

        let now = Utc::now();
        let created_at = format_timestamp(now);
        let mut booking = Booking {
            id: Uuid::new_v4().to_string(),
            tracking_number: String::new(),
            sender_name: valid.sender_name,
            sender_phone: valid.sender_phone,
            sender_address: valid.sender_address,
            receiver_name: valid.receiver_name,
            receiver_phone: valid.receiver_phone,
            receiver_address: valid.receiver_address,
            package_type: valid.package_type,
            package_weight: valid.package_weight,
            package_description: valid.package_description,
            estimated_delivery: Some(courier_quote::estimated_delivery(now, &distance)),
            distance,
            status: BookingStatus::Pending,
            tracking_history: vec![HistoryEntry {
                status: BookingStatus::Pending,
                location: Some(SEED_LOCATION.to_string()),
                description: Some(SEED_DESCRIPTION.to_string()),
                timestamp: created_at.clone(),
            }],
            price: Some(quote.total),
            actual_delivery: None,
            payment_status: PaymentStatus::Unpaid,
            payment_id: None,
            order_id: None,
            created_at: created_at.clone(),
            updated_at: created_at,
        };

        let attempts = self.config.max_tracking_attempts.max(1);
        for attempt in 1..=attempts {
            booking.tracking_number = generate_tracking_number(&self.config.tracking_prefix);
            match self.store.insert_booking(&booking).await {
                Ok(()) => {
                    info!(
                        booking_id = %booking.id,
                        tracking_number = %booking.tracking_number,
                        price = quote.total,
                        "booking created"
                    );
                    return Ok(booking);
                }
                Err(CourierError::DuplicateTrackingNumber(taken)) => {
                    warn!(tracking_number = %taken, attempt, "tracking number collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(CourierError::Storage {
            source: format!("no unique tracking number after {attempts} attempts").into(),
        })
    }

    /// Look up a booking by its public tracking number, case-insensitively.
    pub async fn find_by_tracking_number(&self, number: &str) -> Result<Booking, CourierError> {
        let number = normalize(number);
        self.store
            .find_by_tracking_number(&number)
            .await?
            .ok_or(CourierError::NotFound {
                entity: "tracking number",
                id: number,
            })
    }

    /// Fetch a booking by internal id.
    pub async fn get(&self, id: &str) -> Result<Booking, CourierError> {
        self.store
            .get_booking(id)
            .await?
            .ok_or_else(|| booking_not_found(id))
    }

    /// Move a booking to `status` and append one history entry.
    ///
    /// Any status may follow any other, including itself. The new entry's
    /// timestamp never precedes the previous entry's.
    pub async fn transition(
        &self,
        id: &str,
        status: BookingStatus,
        location: Option<String>,
        description: Option<String>,
    ) -> Result<Booking, CourierError> {
        let mut booking = self.get(id).await?;
        let timestamp = next_timestamp(&booking);

        let actual_delivery = match (status, &booking.actual_delivery) {
            (BookingStatus::Delivered, None) => Some(timestamp.clone()),
            _ => None,
        };
        let entry = HistoryEntry {
            status,
            location,
            description,
            timestamp: timestamp.clone(),
        };
        let change = StatusChange {
            booking_id: booking.id.clone(),
            status,
            entry: entry.clone(),
            updated_at: timestamp.clone(),
            actual_delivery: actual_delivery.clone(),
        };

        if !self.store.apply_status_change(&change).await? {
            return Err(booking_not_found(id));
        }

        let previous = booking.status;
        booking.status = status;
        booking.tracking_history.push(entry);
        booking.updated_at = timestamp;
        if actual_delivery.is_some() {
            booking.actual_delivery = actual_delivery;
        }
        info!(
            booking_id = %booking.id,
            tracking_number = %booking.tracking_number,
            from = %previous,
            to = %status,
            "booking status updated"
        );
        Ok(booking)
    }

    /// All bookings, newest first.
    pub async fn list(&self) -> Result<Vec<Booking>, CourierError> {
        self.store.list_bookings().await
    }

    /// Permanently remove a booking and its history.
    pub async fn delete(&self, id: &str) -> Result<(), CourierError> {
        if !self.store.delete_booking(id).await? {
            return Err(booking_not_found(id));
        }
        info!(booking_id = %id, "booking deleted");
        Ok(())
    }

    /// Record a successful payment against a booking.
    ///
    /// The delivery status is left as it is; the history gains one entry
    /// carrying the current status and the payment id.
    pub async fn confirm_payment(
        &self,
        id: &str,
        order_id: &str,
        payment_id: &str,
    ) -> Result<Booking, CourierError> {
        let mut booking = self.get(id).await?;
        let timestamp = next_timestamp(&booking);
        let entry = HistoryEntry {
            status: booking.status,
            location: None,
            description: Some(format!("Payment received (payment {payment_id})")),
            timestamp: timestamp.clone(),
        };
        let confirmation = PaymentConfirmation {
            booking_id: booking.id.clone(),
            order_id: order_id.to_string(),
            payment_id: payment_id.to_string(),
            entry: entry.clone(),
            updated_at: timestamp.clone(),
        };

        if !self.store.apply_payment(&confirmation).await? {
            return Err(booking_not_found(id));
        }

        booking.payment_status = PaymentStatus::Paid;
        booking.payment_id = Some(confirmation.payment_id);
        booking.order_id = Some(confirmation.order_id);
        booking.tracking_history.push(entry);
        booking.updated_at = timestamp;
        info!(
            booking_id = %booking.id,
            order_id,
            payment_id,
            "payment confirmed"
        );
        Ok(booking)
    }
}

fn booking_not_found(id: &str) -> CourierError {
    CourierError::NotFound {
        entity: "booking",
        id: id.to_string(),
    }
}

/// Current time, clamped so history timestamps never go backwards.
fn next_timestamp(booking: &Booking) -> String {
    let now = now_timestamp();
    booking
        .last_entry()
        .map(|entry| entry.timestamp.clone())
        .filter(|previous| *previous > now)
        .unwrap_or(now)
}
