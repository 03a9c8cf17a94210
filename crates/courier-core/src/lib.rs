// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Courier booking service.
//!
//! This crate provides the domain types, the error type, and the adapter
//! traits shared by every other crate in the workspace. Storage backends and
//! payment providers implement the traits defined here; the booking manager
//! and HTTP gateway only ever talk to them through trait objects.

pub mod error;
pub mod time;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CourierError;
pub use types::{
    AdapterType, Booking, BookingStatus, ContactMessage, ContactStatus, HealthStatus,
    HistoryEntry, PackageType, PaymentConfirmation, PaymentOrder, PaymentStatus, StatusChange,
};

pub use traits::{BookingStore, ContactStore, PaymentProvider, PluginAdapter, StorageAdapter};
