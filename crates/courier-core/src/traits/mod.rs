// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Backends implement these traits and are handed to the services as
//! `Arc<dyn Trait>`. All async traits use `#[async_trait]` for dynamic
//! dispatch compatibility.

pub mod adapter;
pub mod payment;
pub mod storage;

pub use adapter::PluginAdapter;
pub use payment::PaymentProvider;
pub use storage::{BookingStore, ContactStore, StorageAdapter};
