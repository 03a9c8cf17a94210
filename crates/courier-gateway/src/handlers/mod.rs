// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route handlers, one module per resource.

pub mod bookings;
pub mod contact;
pub mod payments;
pub mod system;
