// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory implementation of the store traits.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use courier_core::{
    Booking, BookingStore, ContactMessage, ContactStatus, ContactStore, CourierError,
    PaymentConfirmation, PaymentStatus, StatusChange,
};

#[derive(Default)]
struct State {
    // Insertion order; newest last.
    bookings: Vec<Booking>,
    tracking_numbers: HashSet<String>,
    contacts: Vec<ContactMessage>,
}

/// Vec-backed store. Rejects duplicate tracking numbers like the UNIQUE
/// index does, and can be told to reject the next N inserts as duplicates.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    forced_collisions: AtomicU32,
    insert_attempts: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the next `n` booking inserts as tracking-number collisions.
    pub fn force_collisions(&self, n: u32) {
        self.forced_collisions.store(n, Ordering::SeqCst);
    }

    /// Number of `insert_booking` calls seen so far, including rejected ones.
    pub fn insert_attempts(&self) -> u32 {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub async fn booking_count(&self) -> usize {
        self.state.lock().await.bookings.len()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert_booking(&self, booking: &Booking) -> Result<(), CourierError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let forced = self
            .forced_collisions
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        let mut state = self.state.lock().await;
        if forced || !state.tracking_numbers.insert(booking.tracking_number.clone()) {
            return Err(CourierError::DuplicateTrackingNumber(
                booking.tracking_number.clone(),
            ));
        }
        state.bookings.push(booking.clone());
        Ok(())
    }

    async fn get_booking(&self, id: &str) -> Result<Option<Booking>, CourierError> {
        let state = self.state.lock().await;
        Ok(state.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Booking>, CourierError> {
        let state = self.state.lock().await;
        Ok(state
            .bookings
            .iter()
            .find(|b| b.tracking_number == tracking_number)
            .cloned())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, CourierError> {
        let state = self.state.lock().await;
        let mut bookings: Vec<Booking> = state.bookings.iter().rev().cloned().collect();
        // Stable sort keeps newer insertions first among equal timestamps.
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn apply_status_change(&self, change: &StatusChange) -> Result<bool, CourierError> {
        let mut state = self.state.lock().await;
        let Some(booking) = state.bookings.iter_mut().find(|b| b.id == change.booking_id) else {
            return Ok(false);
        };
        booking.status = change.status;
        booking.tracking_history.push(change.entry.clone());
        booking.updated_at = change.updated_at.clone();
        if booking.actual_delivery.is_none() {
            booking.actual_delivery = change.actual_delivery.clone();
        }
        Ok(true)
    }

    async fn apply_payment(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<bool, CourierError> {
        let mut state = self.state.lock().await;
        let Some(booking) = state
            .bookings
            .iter_mut()
            .find(|b| b.id == confirmation.booking_id)
        else {
            return Ok(false);
        };
        booking.payment_status = PaymentStatus::Paid;
        booking.payment_id = Some(confirmation.payment_id.clone());
        booking.order_id = Some(confirmation.order_id.clone());
        booking.tracking_history.push(confirmation.entry.clone());
        booking.updated_at = confirmation.updated_at.clone();
        Ok(true)
    }

    async fn delete_booking(&self, id: &str) -> Result<bool, CourierError> {
        let mut state = self.state.lock().await;
        let Some(pos) = state.bookings.iter().position(|b| b.id == id) else {
            return Ok(false);
        };
        let removed = state.bookings.remove(pos);
        state.tracking_numbers.remove(&removed.tracking_number);
        Ok(true)
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert_contact(&self, contact: &ContactMessage) -> Result<(), CourierError> {
        self.state.lock().await.contacts.push(contact.clone());
        Ok(())
    }

    async fn get_contact(&self, id: &str) -> Result<Option<ContactMessage>, CourierError> {
        let state = self.state.lock().await;
        Ok(state.contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, CourierError> {
        let state = self.state.lock().await;
        let mut contacts: Vec<ContactMessage> = state.contacts.iter().rev().cloned().collect();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    async fn update_contact_status(
        &self,
        id: &str,
        status: ContactStatus,
        updated_at: &str,
    ) -> Result<Option<ContactMessage>, CourierError> {
        let mut state = self.state.lock().await;
        Ok(state.contacts.iter_mut().find(|c| c.id == id).map(|c| {
            c.status = status;
            c.updated_at = updated_at.to_string();
            c.clone()
        }))
    }
}
