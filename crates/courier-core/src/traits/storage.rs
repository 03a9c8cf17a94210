// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence traits for bookings and contact messages.

use async_trait::async_trait;

use crate::error::CourierError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{
    Booking, ContactMessage, ContactStatus, PaymentConfirmation, StatusChange,
};

/// A storage backend with an explicit open/close lifecycle.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Opens the backend and applies pending migrations.
    async fn initialize(&self) -> Result<(), CourierError>;

    /// Flushes pending writes and releases the connection.
    async fn close(&self) -> Result<(), CourierError>;
}

/// Booking persistence.
///
/// Methods that target an existing record return `Ok(false)` / `Ok(None)`
/// when it does not exist; `Err` is reserved for backend failures.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a new booking together with its history.
    ///
    /// Fails with [`CourierError::DuplicateTrackingNumber`] when the
    /// tracking number is already taken.
    async fn insert_booking(&self, booking: &Booking) -> Result<(), CourierError>;

    /// Fetch a booking by internal id.
    async fn get_booking(&self, id: &str) -> Result<Option<Booking>, CourierError>;

    /// Fetch a booking by exact (already normalized) tracking number.
    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Booking>, CourierError>;

    /// All bookings, most recently created first.
    async fn list_bookings(&self) -> Result<Vec<Booking>, CourierError>;

    /// Set the current status and append the history entry atomically.
    async fn apply_status_change(&self, change: &StatusChange) -> Result<bool, CourierError>;

    /// Record payment fields and append the history entry atomically.
    async fn apply_payment(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<bool, CourierError>;

    /// Remove a booking and its history.
    async fn delete_booking(&self, id: &str) -> Result<bool, CourierError>;
}

/// Contact message persistence.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact(&self, contact: &ContactMessage) -> Result<(), CourierError>;

    async fn get_contact(&self, id: &str) -> Result<Option<ContactMessage>, CourierError>;

    /// All contact messages, newest first.
    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, CourierError>;

    /// Update the status and return the updated record.
    async fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
        updated_at: &str,
    ) -> Result<Option<ContactMessage>, CourierError>;
}
