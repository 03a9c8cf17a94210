// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking lifecycle for the Courier service.
//!
//! [`BookingManager`] owns creation, lookup, status transitions, payment
//! confirmation and deletion of bookings. [`ContactService`] handles the
//! contact form. Both talk to storage only through the store traits in
//! `courier-core`, so they run unchanged against SQLite or the in-memory
//! test store.

pub mod contact;
pub mod input;
pub mod manager;
pub mod tracking;

pub use contact::ContactService;
pub use input::{lenient_number, NewBooking, NewContact};
pub use manager::BookingManager;
pub use tracking::generate_tracking_number;
