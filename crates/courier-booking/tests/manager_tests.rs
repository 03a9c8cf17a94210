// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking lifecycle tests against the in-memory store.

use std::collections::HashSet;
use std::sync::Arc;

use courier_booking::{BookingManager, ContactService, NewBooking, NewContact};
use courier_config::model::BookingConfig;
use courier_core::{BookingStatus, ContactStatus, CourierError, PaymentStatus};
use courier_test_utils::MemoryStore;
use tracing_test::traced_test;

fn request() -> NewBooking {
    NewBooking {
        sender_name: Some("Asha Verma".into()),
        sender_phone: Some("9000000001".into()),
        sender_address: Some("12 MG Road, Pune".into()),
        receiver_name: Some("Ravi Kumar".into()),
        receiver_phone: Some("9000000002".into()),
        receiver_address: Some("4 Park Street, Kolkata".into()),
        package_type: Some("document".into()),
        package_weight: Some(5.0),
        package_description: Some("Contracts".into()),
        distance: None,
    }
}

fn manager() -> (Arc<MemoryStore>, BookingManager) {
    let store = Arc::new(MemoryStore::new());
    let manager = BookingManager::new(store.clone(), BookingConfig::default());
    (store, manager)
}

#[tokio::test]
async fn new_booking_is_pending_with_one_seed_entry() {
    let (_, manager) = manager();
    let booking = manager.create(request()).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.tracking_history.len(), 1);
    let seed = &booking.tracking_history[0];
    assert_eq!(seed.status, BookingStatus::Pending);
    assert_eq!(seed.location.as_deref(), Some("Processing request"));
    assert_eq!(seed.description.as_deref(), Some("Booking created successfully"));
    assert_eq!(seed.timestamp, booking.created_at);
    assert_eq!(booking.price, Some(150));
    assert_eq!(booking.payment_status, PaymentStatus::Unpaid);
    assert_eq!(booking.distance, "local");
    assert!(booking.estimated_delivery.is_some());
    assert!(booking.tracking_number.starts_with("SC"));
    assert_eq!(booking.tracking_number.len(), 14);
}

#[tokio::test]
async fn distance_changes_price_and_estimate() {
    let (_, manager) = manager();
    let mut input = request();
    input.package_type = Some("fragile".into());
    input.distance = Some("international".into());
    let booking = manager.create(input).await.unwrap();
    assert_eq!(booking.price, Some(1800));
    assert!(booking.estimated_delivery.as_deref().unwrap() > booking.created_at.as_str());
}

#[tokio::test]
async fn ten_thousand_bookings_have_distinct_tracking_numbers() {
    let (store, manager) = manager();
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let booking = manager.create(request()).await.unwrap();
        assert!(seen.insert(booking.tracking_number));
    }
    assert_eq!(store.booking_count().await, 10_000);
    // Every number was accepted on its first insert.
    assert_eq!(store.insert_attempts(), 10_000);
}

#[tokio::test]
#[traced_test]
async fn collision_is_retried() {
    let (store, manager) = manager();
    store.force_collisions(2);
    let booking = manager.create(request()).await.unwrap();
    assert_eq!(store.insert_attempts(), 3);
    assert!(manager.get(&booking.id).await.is_ok());
    assert!(logs_contain("tracking number collision, retrying"));
    assert!(logs_contain("booking created"));
}

#[tokio::test]
async fn collision_retries_are_bounded() {
    let store = Arc::new(MemoryStore::new());
    let config = BookingConfig {
        max_tracking_attempts: 3,
        ..BookingConfig::default()
    };
    let manager = BookingManager::new(store.clone(), config);
    store.force_collisions(10);

    let err = manager.create(request()).await.unwrap_err();
    assert!(matches!(err, CourierError::Storage { .. }));
    assert_eq!(store.insert_attempts(), 3);
    assert_eq!(store.booking_count().await, 0);
}

#[tokio::test]
async fn invalid_request_never_reaches_store() {
    let (store, manager) = manager();
    let mut input = request();
    input.receiver_phone = None;
    input.package_weight = Some(0.05);

    match manager.create(input).await.unwrap_err() {
        CourierError::Validation { fields, .. } => {
            assert_eq!(fields, vec!["receiverPhone", "packageWeight"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.insert_attempts(), 0);
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let (_, manager) = manager();
    let booking = manager.create(request()).await.unwrap();

    let lower = booking.tracking_number.to_lowercase();
    let found = manager
        .find_by_tracking_number(&format!("  {lower} "))
        .await
        .unwrap();
    assert_eq!(found.id, booking.id);
}

#[tokio::test]
async fn unknown_tracking_number_is_not_found() {
    let (_, manager) = manager();
    let err = manager
        .find_by_tracking_number("SC000000XXXXXX")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn transitions_append_in_order_even_when_repeated() {
    let (_, manager) = manager();
    let booking = manager.create(request()).await.unwrap();

    let steps = [
        BookingStatus::PickedUp,
        BookingStatus::InTransit,
        BookingStatus::InTransit,
        BookingStatus::Pending,
        BookingStatus::OutForDelivery,
    ];
    for (i, status) in steps.iter().enumerate() {
        let updated = manager
            .transition(&booking.id, *status, Some(format!("Hub {i}")), None)
            .await
            .unwrap();
        assert_eq!(updated.status, *status);
        assert_eq!(updated.tracking_history.len(), i + 2);
        let last = updated.tracking_history.last().unwrap();
        assert_eq!(last.status, *status);
        let previous = &updated.tracking_history[i];
        assert!(last.timestamp >= previous.timestamp);
    }

    let stored = manager.get(&booking.id).await.unwrap();
    let statuses: Vec<BookingStatus> = stored.tracking_history.iter().map(|e| e.status).collect();
    assert_eq!(statuses[0], BookingStatus::Pending);
    assert_eq!(&statuses[1..], &steps);
}

#[tokio::test]
async fn first_delivery_sets_actual_delivery_once() {
    let (_, manager) = manager();
    let booking = manager.create(request()).await.unwrap();
    assert!(booking.actual_delivery.is_none());

    let delivered = manager
        .transition(&booking.id, BookingStatus::Delivered, None, Some("Signed".into()))
        .await
        .unwrap();
    let first = delivered.actual_delivery.clone().unwrap();
    assert_eq!(first, delivered.tracking_history.last().unwrap().timestamp);

    manager
        .transition(&booking.id, BookingStatus::InTransit, None, None)
        .await
        .unwrap();
    let again = manager
        .transition(&booking.id, BookingStatus::Delivered, None, None)
        .await
        .unwrap();
    assert_eq!(again.actual_delivery, Some(first));
}

#[tokio::test]
async fn transition_of_missing_booking_is_not_found() {
    let (_, manager) = manager();
    let err = manager
        .transition("nope", BookingStatus::Delivered, None, None)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (_, manager) = manager();
    let booking = manager.create(request()).await.unwrap();
    manager.delete(&booking.id).await.unwrap();

    assert!(manager.get(&booking.id).await.unwrap_err().is_not_found());
    assert!(
        manager
            .find_by_tracking_number(&booking.tracking_number)
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(manager.delete(&booking.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn list_is_newest_first() {
    let (_, manager) = manager();
    let first = manager.create(request()).await.unwrap();
    let second = manager.create(request()).await.unwrap();
    let ids: Vec<String> = manager.list().await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn payment_confirmation_keeps_status_and_appends_history() {
    let (_, manager) = manager();
    let booking = manager.create(request()).await.unwrap();
    let paid = manager
        .confirm_payment(&booking.id, "order_1", "pay_1")
        .await
        .unwrap();

    assert_eq!(paid.status, BookingStatus::Pending);
    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    assert_eq!(paid.payment_id.as_deref(), Some("pay_1"));
    assert_eq!(paid.order_id.as_deref(), Some("order_1"));
    assert_eq!(paid.tracking_history.len(), 2);
    assert_eq!(
        paid.tracking_history[1].description.as_deref(),
        Some("Payment received (payment pay_1)")
    );
    assert_eq!(manager.get(&booking.id).await.unwrap(), paid);
}

#[tokio::test]
async fn contact_lifecycle() {
    let store = Arc::new(MemoryStore::new());
    let contacts = ContactService::new(store);

    let message = contacts
        .submit(NewContact {
            name: Some("Meera".into()),
            email: Some("meera@example.com".into()),
            phone: None,
            message: Some("Do you ship to Goa?".into()),
        })
        .await
        .unwrap();
    assert_eq!(message.status, ContactStatus::New);

    let updated = contacts
        .update_status(&message.id, ContactStatus::Replied)
        .await
        .unwrap();
    assert_eq!(updated.status, ContactStatus::Replied);
    assert_eq!(contacts.get(&message.id).await.unwrap(), updated);
    assert!(contacts.get("missing").await.unwrap_err().is_not_found());
    assert_eq!(contacts.list().await.unwrap(), vec![updated]);

    let err = contacts
        .update_status("missing", ContactStatus::Read)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn invalid_contact_is_rejected() {
    let contacts = ContactService::new(Arc::new(MemoryStore::new()));
    let err = contacts.submit(NewContact::default()).await.unwrap_err();
    assert!(matches!(err, CourierError::Validation { .. }));
    assert!(contacts.list().await.unwrap().is_empty());
}
