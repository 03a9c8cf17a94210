// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shipping quotations and delivery estimates.
//!
//! Pure functions with no I/O. The booking manager prices new bookings with
//! [`calculate`] and the gateway exposes it directly as the cost endpoint.

pub mod delivery;
pub mod pricing;

pub use delivery::{estimated_delivery, DistanceClass};
pub use pricing::{base_price, calculate, Quote, QuoteBreakdown};
