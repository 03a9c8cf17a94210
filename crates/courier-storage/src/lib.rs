// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Courier booking service.
//!
//! WAL-mode SQLite with embedded refinery migrations and a single-writer
//! model through `tokio-rusqlite`. Bookings, their append-only tracking
//! history, and contact messages are stored here.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod queries;

pub use adapter::SqliteStorage;
pub use database::Database;
