// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the storage, booking, and gateway crates.
//!
//! JSON field names are camelCase to match what the web frontend sends and
//! expects. Enum values are kebab-case strings both on the wire and in the
//! database.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Payment,
    Gateway,
}

/// Delivery state of a booking.
///
/// Any state may follow any other; the history keeps every assignment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Package category accepted at booking creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PackageType {
    Document,
    Parcel,
    Small,
    Medium,
    Large,
    Electronics,
    Fragile,
}

/// Whether a booking has been paid for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

/// Triage state of a contact message.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// One immutable record in a booking's tracking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub status: BookingStatus,
    pub location: Option<String>,
    pub description: Option<String>,
    /// RFC 3339 UTC, millisecond precision.
    pub timestamp: String,
}

/// A shipment booking with its full tracking history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Internal identifier (UUID v4).
    pub id: String,
    /// Public identifier, always upper-case.
    pub tracking_number: String,
    pub sender_name: String,
    pub sender_phone: String,
    pub sender_address: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub package_type: PackageType,
    pub package_weight: f64,
    pub package_description: Option<String>,
    /// Distance class used for pricing (e.g. "local", "national").
    pub distance: String,
    pub status: BookingStatus,
    /// Chronological, append-only.
    pub tracking_history: Vec<HistoryEntry>,
    pub price: Option<i64>,
    pub estimated_delivery: Option<String>,
    pub actual_delivery: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Booking {
    /// The most recent history entry, if any.
    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.tracking_history.last()
    }
}

/// A status assignment to persist: the new status plus its history entry.
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub booking_id: String,
    pub status: BookingStatus,
    pub entry: HistoryEntry,
    pub updated_at: String,
    /// Set only on the first transition to `delivered`.
    pub actual_delivery: Option<String>,
}

/// Payment fields to persist after a provider confirmed a payment.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    pub booking_id: String,
    pub order_id: String,
    pub payment_id: String,
    pub entry: HistoryEntry,
    pub updated_at: String,
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A provider-issued payment order handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    /// Amount in minor currency units (paise, cents).
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub booking_id: String,
}
