// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Courier integration tests.
//!
//! # Components
//!
//! - [`MemoryStore`] - In-memory booking and contact store with the same
//!   uniqueness rules as SQLite
//! - [`TestHarness`] - Fully wired services over a temporary SQLite database

pub mod harness;
pub mod memory_store;

pub use harness::TestHarness;
pub use memory_store::MemoryStore;
