// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking and tracking-history operations.
//!
//! History rows live in `booking_history` and are read back ordered by
//! their autoincrement `seq`, which is the insertion order.

use std::collections::HashMap;

use courier_core::types::{Booking, HistoryEntry, PaymentConfirmation, StatusChange};
use courier_core::{CourierError, PaymentStatus};
use rusqlite::{params, OptionalExtension, Transaction};

use crate::database::{map_tr_err, parse_column, Database};

const BOOKING_COLUMNS: &str = "id, tracking_number, sender_name, sender_phone, sender_address,
     receiver_name, receiver_phone, receiver_address, package_type, package_weight,
     package_description, distance, status, price, estimated_delivery, actual_delivery,
     payment_status, payment_id, order_id, created_at, updated_at";

fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        tracking_number: row.get(1)?,
        sender_name: row.get(2)?,
        sender_phone: row.get(3)?,
        sender_address: row.get(4)?,
        receiver_name: row.get(5)?,
        receiver_phone: row.get(6)?,
        receiver_address: row.get(7)?,
        package_type: parse_column(row, 8)?,
        package_weight: row.get(9)?,
        package_description: row.get(10)?,
        distance: row.get(11)?,
        status: parse_column(row, 12)?,
        tracking_history: Vec::new(),
        price: row.get(13)?,
        estimated_delivery: row.get(14)?,
        actual_delivery: row.get(15)?,
        payment_status: parse_column(row, 16)?,
        payment_id: row.get(17)?,
        order_id: row.get(18)?,
        created_at: row.get(19)?,
        updated_at: row.get(20)?,
    })
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        status: parse_column(row, 0)?,
        location: row.get(1)?,
        description: row.get(2)?,
        timestamp: row.get(3)?,
    })
}

fn load_history(conn: &rusqlite::Connection, booking_id: &str) -> rusqlite::Result<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT status, location, description, timestamp
         FROM booking_history WHERE booking_id = ?1 ORDER BY seq ASC",
    )?;
    let entries = stmt
        .query_map(params![booking_id], row_to_entry)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

fn insert_entry(tx: &Transaction<'_>, booking_id: &str, entry: &HistoryEntry) -> rusqlite::Result<()> {
    tx.execute(
        "INSERT INTO booking_history (booking_id, status, location, description, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            booking_id,
            entry.status.to_string(),
            entry.location,
            entry.description,
            entry.timestamp,
        ],
    )?;
    Ok(())
}

/// Fetch one booking (with history) matching a single-column predicate.
fn select_one(
    conn: &rusqlite::Connection,
    predicate: &str,
    value: &str,
) -> rusqlite::Result<Option<Booking>> {
    let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE {predicate} = ?1");
    let booking = conn
        .query_row(&sql, params![value], row_to_booking)
        .optional()?;
    match booking {
        Some(mut booking) => {
            booking.tracking_history = load_history(conn, &booking.id)?;
            Ok(Some(booking))
        }
        None => Ok(None),
    }
}

/// Insert a booking and its seed history.
///
/// Returns `DuplicateTrackingNumber` when the unique index rejects the row.
pub async fn insert_booking(db: &Database, booking: &Booking) -> Result<(), CourierError> {
    let booking = booking.clone();
    let tracking_number = booking.tracking_number.clone();
    let inserted = db
        .connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let tx = conn.transaction()?;
            let result = tx.execute(
                &format!(
                    "INSERT INTO bookings ({BOOKING_COLUMNS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11,
                             ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21)"
                ),
                params![
                    booking.id,
                    booking.tracking_number,
                    booking.sender_name,
                    booking.sender_phone,
                    booking.sender_address,
                    booking.receiver_name,
                    booking.receiver_phone,
                    booking.receiver_address,
                    booking.package_type.to_string(),
                    booking.package_weight,
                    booking.package_description,
                    booking.distance,
                    booking.status.to_string(),
                    booking.price,
                    booking.estimated_delivery,
                    booking.actual_delivery,
                    booking.payment_status.to_string(),
                    booking.payment_id,
                    booking.order_id,
                    booking.created_at,
                    booking.updated_at,
                ],
            );
            match result {
                Ok(_) => {}
                Err(rusqlite::Error::SqliteFailure(err, _))
                    if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    return Ok(false);
                }
                Err(e) => return Err(e),
            }
            for entry in &booking.tracking_history {
                insert_entry(&tx, &booking.id, entry)?;
            }
            tx.commit()?;
            Ok(true)
        })
        .await
        .map_err(map_tr_err)?;

    if inserted {
        Ok(())
    } else {
        Err(CourierError::DuplicateTrackingNumber(tracking_number))
    }
}

/// Get a booking by internal id.
pub async fn get_booking(db: &Database, id: &str) -> Result<Option<Booking>, CourierError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| select_one(conn, "id", &id))
        .await
        .map_err(map_tr_err)
}

/// Get a booking by exact tracking number.
pub async fn find_by_tracking_number(
    db: &Database,
    tracking_number: &str,
) -> Result<Option<Booking>, CourierError> {
    let tracking_number = tracking_number.to_string();
    db.connection()
        .call(move |conn| select_one(conn, "tracking_number", &tracking_number))
        .await
        .map_err(map_tr_err)
}

/// List every booking, newest first, each with its full history.
pub async fn list_bookings(db: &Database) -> Result<Vec<Booking>, CourierError> {
    db.connection()
        .call(move |conn| -> Result<Vec<Booking>, rusqlite::Error> {
            let mut history: HashMap<String, Vec<HistoryEntry>> = HashMap::new();
            {
                let mut stmt = conn.prepare(
                    "SELECT booking_id, status, location, description, timestamp
                     FROM booking_history ORDER BY seq ASC",
                )?;
                let rows = stmt.query_map([], |row| {
                    let booking_id: String = row.get(0)?;
                    let entry = HistoryEntry {
                        status: parse_column(row, 1)?,
                        location: row.get(2)?,
                        description: row.get(3)?,
                        timestamp: row.get(4)?,
                    };
                    Ok((booking_id, entry))
                })?;
                for row in rows {
                    let (booking_id, entry) = row?;
                    history.entry(booking_id).or_default().push(entry);
                }
            }

            let mut stmt = conn.prepare(&format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, rowid DESC"
            ))?;
            let rows = stmt.query_map([], row_to_booking)?;
            let mut bookings = Vec::new();
            for row in rows {
                let mut booking = row?;
                booking.tracking_history = history.remove(&booking.id).unwrap_or_default();
                bookings.push(booking);
            }
            Ok(bookings)
        })
        .await
        .map_err(map_tr_err)
}

/// Set status (and first delivery time) and append one history entry.
///
/// Returns `false` when no booking has the given id.
pub async fn apply_status_change(db: &Database, change: &StatusChange) -> Result<bool, CourierError> {
    let change = change.clone();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let tx = conn.transaction()?;
            let updated = tx.execute(
                "UPDATE bookings
                 SET status = ?1, updated_at = ?2, actual_delivery = COALESCE(actual_delivery, ?3)
                 WHERE id = ?4",
                params![
                    change.status.to_string(),
                    change.updated_at,
                    change.actual_delivery,
                    change.booking_id,
                ],
            )?;
            if updated == 0 {
                return Ok(false);
            }
            insert_entry(&tx, &change.booking_id, &change.entry)?;
            tx.commit()?;
            Ok(true)
        })
        .await
        .map_err(map_tr_err)
}

/// Mark a booking paid and append one history entry.
pub async fn apply_payment(
    db: &Database,
    confirmation: &PaymentConfirmation,
) -> Result<bool, CourierError> {
    let confirmation = confirmation.clone();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let tx = conn.transaction()?;
            let updated = tx.execute(
                "UPDATE bookings
                 SET payment_status = ?1, payment_id = ?2, order_id = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![
                    PaymentStatus::Paid.to_string(),
                    confirmation.payment_id,
                    confirmation.order_id,
                    confirmation.updated_at,
                    confirmation.booking_id,
                ],
            )?;
            if updated == 0 {
                return Ok(false);
            }
            insert_entry(&tx, &confirmation.booking_id, &confirmation.entry)?;
            tx.commit()?;
            Ok(true)
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a booking and its history. Returns `false` if nothing was deleted.
pub async fn delete_booking(db: &Database, id: &str) -> Result<bool, CourierError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| -> Result<bool, rusqlite::Error> {
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM booking_history WHERE booking_id = ?1",
                params![id],
            )?;
            let deleted = tx.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
            tx.commit()?;
            Ok(deleted > 0)
        })
        .await
        .map_err(map_tr_err)
}
