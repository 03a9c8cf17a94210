// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact message CRUD operations.

use courier_core::types::{ContactMessage, ContactStatus};
use courier_core::CourierError;
use rusqlite::{params, OptionalExtension};

use crate::database::{map_tr_err, parse_column, Database};

fn row_to_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContactMessage> {
    Ok(ContactMessage {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        status: parse_column(row, 5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

/// Insert a new contact message.
pub async fn insert_contact(db: &Database, contact: &ContactMessage) -> Result<(), CourierError> {
    let contact = contact.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "INSERT INTO contacts (id, name, email, phone, message, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    contact.id,
                    contact.name,
                    contact.email,
                    contact.phone,
                    contact.message,
                    contact.status.to_string(),
                    contact.created_at,
                    contact.updated_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a contact message by ID.
pub async fn get_contact(db: &Database, id: &str) -> Result<Option<ContactMessage>, CourierError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<ContactMessage>, rusqlite::Error> {
            conn.query_row(
                "SELECT id, name, email, phone, message, status, created_at, updated_at
                 FROM contacts WHERE id = ?1",
                params![id],
                row_to_contact,
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// List contact messages, newest first.
pub async fn list_contacts(db: &Database) -> Result<Vec<ContactMessage>, CourierError> {
    db.connection()
        .call(move |conn| -> Result<Vec<ContactMessage>, rusqlite::Error> {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, phone, message, status, created_at, updated_at
                 FROM contacts ORDER BY created_at DESC, rowid DESC",
            )?;
            let contacts = stmt
                .query_map([], row_to_contact)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(contacts)
        })
        .await
        .map_err(map_tr_err)
}

/// Update a contact message's status and return the updated row.
pub async fn update_contact_status(
    db: &Database,
    id: &str,
    status: ContactStatus,
    updated_at: &str,
) -> Result<Option<ContactMessage>, CourierError> {
    let id = id.to_string();
    let updated_at = updated_at.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<ContactMessage>, rusqlite::Error> {
            let updated = conn.execute(
                "UPDATE contacts SET status = ?1, updated_at = ?2 WHERE id = ?3",
                params![status.to_string(), updated_at, id],
            )?;
            if updated == 0 {
                return Ok(None);
            }
            conn.query_row(
                "SELECT id, name, email, phone, message, status, created_at, updated_at
                 FROM contacts WHERE id = ?1",
                params![id],
                row_to_contact,
            )
            .optional()
        })
        .await
        .map_err(map_tr_err)
}
