// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API for the Courier booking service.
//!
//! An axum router over the booking, contact and payment services. Every
//! response uses the same JSON envelope: `success` plus either the payload
//! fields or `message`/`error` on failure.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, GatewayState, ServiceInfo};
