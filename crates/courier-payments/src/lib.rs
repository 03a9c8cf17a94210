// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment boundary for the Courier booking service.
//!
//! Orders are minted by a [`PaymentProvider`](courier_core::PaymentProvider);
//! confirmations are recorded on the booking through the
//! [`BookingManager`](courier_booking::BookingManager).

pub mod local;
pub mod service;

pub use local::LocalPaymentProvider;
pub use service::{PaymentService, VerifyPayment};
