// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring every service over a temporary SQLite database.

use std::sync::Arc;

use courier_booking::{BookingManager, ContactService};
use courier_config::model::{BookingConfig, CourierConfig, PaymentsConfig, StorageConfig};
use courier_core::{CourierError, StorageAdapter};
use courier_payments::{LocalPaymentProvider, PaymentService};
use courier_storage::SqliteStorage;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    booking: BookingConfig,
    payments: PaymentsConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            booking: BookingConfig::default(),
            payments: PaymentsConfig::default(),
        }
    }

    pub fn with_booking_config(mut self, booking: BookingConfig) -> Self {
        self.booking = booking;
        self
    }

    /// Set the public key id the payment provider reports.
    pub fn with_payment_key(mut self, key_id: &str) -> Self {
        self.payments.key_id = Some(key_id.to_string());
        self
    }

    /// Build the harness, creating and migrating the temp database.
    pub async fn build(self) -> Result<TestHarness, CourierError> {
        let temp_dir =
            tempfile::TempDir::new().map_err(|e| CourierError::Storage { source: e.into() })?;
        let db_path = temp_dir.path().join("test.db");

        let storage_config = StorageConfig {
            database_path: db_path.to_string_lossy().to_string(),
            wal_mode: true,
        };
        let storage = Arc::new(SqliteStorage::new(storage_config.clone()));
        storage.initialize().await?;

        let bookings = Arc::new(BookingManager::new(storage.clone(), self.booking.clone()));
        let contacts = Arc::new(ContactService::new(storage.clone()));
        let provider = Arc::new(LocalPaymentProvider::new(self.payments.key_id.clone()));
        let payments = Arc::new(PaymentService::new(
            provider,
            bookings.clone(),
            self.payments.clone(),
        ));

        let config = CourierConfig {
            storage: storage_config,
            booking: self.booking,
            payments: self.payments,
            ..CourierConfig::default()
        };

        Ok(TestHarness {
            config,
            storage,
            bookings,
            contacts,
            payments,
            _temp_dir: temp_dir,
        })
    }
}

/// Every service wired to one temp SQLite database.
///
/// The database lives as long as the harness.
pub struct TestHarness {
    pub config: CourierConfig,
    pub storage: Arc<SqliteStorage>,
    pub bookings: Arc<BookingManager>,
    pub contacts: Arc<ContactService>,
    pub payments: Arc<PaymentService>,
    _temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }
}
