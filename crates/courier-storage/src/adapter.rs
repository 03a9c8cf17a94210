// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the storage traits.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use courier_config::model::StorageConfig;
use courier_core::types::{
    AdapterType, Booking, ContactMessage, ContactStatus, HealthStatus, PaymentConfirmation,
    StatusChange,
};
use courier_core::{BookingStore, ContactStore, CourierError, PluginAdapter, StorageAdapter};

use crate::database::Database;
use crate::queries;

/// SQLite-backed storage adapter.
///
/// Wraps a [`Database`] handle and delegates to the query modules. The
/// database is opened by [`StorageAdapter::initialize`], not by `new`.
pub struct SqliteStorage {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStorage {
    /// Create a new SqliteStorage. No file is touched until `initialize`.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    fn db(&self) -> Result<&Database, CourierError> {
        self.db.get().ok_or_else(|| CourierError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStorage {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, CourierError> {
        let Some(db) = self.db.get() else {
            return Ok(HealthStatus::Unhealthy("storage not initialized".to_string()));
        };
        db.connection()
            .call(|conn| -> Result<i64, rusqlite::Error> {
                conn.query_row("SELECT 1", [], |row| row.get(0))
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), CourierError> {
        if let Some(db) = self.db.get() {
            db.checkpoint().await?;
            debug!("shutdown: WAL checkpoint complete");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn initialize(&self) -> Result<(), CourierError> {
        let db = Database::open_with(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| CourierError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), CourierError> {
        self.db()?.checkpoint().await?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

#[async_trait]
impl BookingStore for SqliteStorage {
    async fn insert_booking(&self, booking: &Booking) -> Result<(), CourierError> {
        queries::bookings::insert_booking(self.db()?, booking).await
    }

    async fn get_booking(&self, id: &str) -> Result<Option<Booking>, CourierError> {
        queries::bookings::get_booking(self.db()?, id).await
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Booking>, CourierError> {
        queries::bookings::find_by_tracking_number(self.db()?, tracking_number).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, CourierError> {
        queries::bookings::list_bookings(self.db()?).await
    }

    async fn apply_status_change(&self, change: &StatusChange) -> Result<bool, CourierError> {
        queries::bookings::apply_status_change(self.db()?, change).await
    }

    async fn apply_payment(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<bool, CourierError> {
        queries::bookings::apply_payment(self.db()?, confirmation).await
    }

    async fn delete_booking(&self, id: &str) -> Result<bool, CourierError> {
        queries::bookings::delete_booking(self.db()?, id).await
    }
}

#[async_trait]
impl ContactStore for SqliteStorage {
    async fn insert_contact(&self, contact: &ContactMessage) -> Result<(), CourierError> {
        queries::contacts::insert_contact(self.db()?, contact).await
    }

    async fn get_contact(&self, id: &str) -> Result<Option<ContactMessage>, CourierError> {
        queries::contacts::get_contact(self.db()?, id).await
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, CourierError> {
        queries::contacts::list_contacts(self.db()?).await
    }

    async fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
        updated_at: &str,
    ) -> Result<Option<ContactMessage>, CourierError> {
        queries::contacts::update_contact_status(self.db()?, id, status, updated_at).await
    }
}
