// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact-form messages.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use courier_core::time::now_timestamp;
use courier_core::{ContactMessage, ContactStatus, ContactStore, CourierError};

use crate::input::NewContact;

/// Accepts contact messages and tracks their triage status.
pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Validate and store a new message with status `new`.
    pub async fn submit(&self, input: NewContact) -> Result<ContactMessage, CourierError> {
        let valid = input.validate()?;
        let now = now_timestamp();
        let contact = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: valid.name,
            email: valid.email,
            phone: valid.phone,
            message: valid.message,
            status: ContactStatus::New,
            created_at: now.clone(),
            updated_at: now,
        };
        self.store.insert_contact(&contact).await?;
        info!(contact_id = %contact.id, "contact message received");
        Ok(contact)
    }

    /// All messages, newest first.
    pub async fn list(&self) -> Result<Vec<ContactMessage>, CourierError> {
        self.store.list_contacts().await
    }

    /// Fetch one message by id.
    pub async fn get(&self, id: &str) -> Result<ContactMessage, CourierError> {
        self.store
            .get_contact(id)
            .await?
            .ok_or_else(|| CourierError::NotFound {
                entity: "contact message",
                id: id.to_string(),
            })
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: ContactStatus,
    ) -> Result<ContactMessage, CourierError> {
        let contact = self
            .store
            .update_contact_status(id, status, &now_timestamp())
            .await?
            .ok_or_else(|| CourierError::NotFound {
                entity: "contact message",
                id: id.to_string(),
            })?;
        info!(contact_id = %id, status = %status, "contact status updated");
        Ok(contact)
    }
}
