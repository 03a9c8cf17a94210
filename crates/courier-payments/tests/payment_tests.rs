// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payment flow against a temporary SQLite database.

use courier_booking::NewBooking;
use courier_core::{BookingStatus, CourierError, PaymentStatus};
use courier_payments::VerifyPayment;
use courier_test_utils::TestHarness;
use tracing_test::traced_test;

fn request() -> NewBooking {
    NewBooking {
        sender_name: Some("Asha".into()),
        sender_phone: Some("9000000001".into()),
        sender_address: Some("12 MG Road".into()),
        receiver_name: Some("Ravi".into()),
        receiver_phone: Some("9000000002".into()),
        receiver_address: Some("4 Park Street".into()),
        package_type: Some("medium".into()),
        package_weight: Some(2.0),
        ..NewBooking::default()
    }
}

#[tokio::test]
async fn create_order_converts_to_minor_units() {
    let harness = TestHarness::builder()
        .with_payment_key("rzp_test_key")
        .build()
        .await
        .unwrap();

    let order = harness
        .payments
        .create_order("booking-1", 240.5, None)
        .await
        .unwrap();
    assert_eq!(order.amount, 24050);
    assert_eq!(order.currency, "INR");
    assert_eq!(order.receipt, "receipt_booking-1");
    assert_eq!(harness.payments.key_id(), Some("rzp_test_key"));

    let order = harness
        .payments
        .create_order("booking-1", 10.0, Some("usd"))
        .await
        .unwrap();
    assert_eq!(order.currency, "USD");
}

#[tokio::test]
async fn create_order_rejects_bad_amounts() {
    let harness = TestHarness::builder().build().await.unwrap();
    for amount in [0.0, -5.0, f64::NAN] {
        let err = harness
            .payments
            .create_order("booking-1", amount, None)
            .await
            .unwrap_err();
        match err {
            CourierError::Validation { fields, .. } => assert_eq!(fields, vec!["amount"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn verify_payment_marks_booking_paid() {
    let harness = TestHarness::builder().build().await.unwrap();
    let booking = harness.bookings.create(request()).await.unwrap();
    let order = harness
        .payments
        .create_order(&booking.id, booking.price.unwrap() as f64, None)
        .await
        .unwrap();

    let paid = harness
        .payments
        .verify_payment(VerifyPayment {
            order_id: Some(order.order_id.clone()),
            payment_id: Some("pay_123".into()),
            signature: Some("ignored".into()),
            booking_id: Some(booking.id.clone()),
        })
        .await
        .unwrap();

    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    assert_eq!(paid.status, BookingStatus::Pending);
    assert_eq!(paid.order_id, Some(order.order_id));

    let stored = harness.bookings.get(&booking.id).await.unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Paid);
    assert_eq!(stored.tracking_history.len(), 2);
}

#[tokio::test]
#[traced_test]
async fn verify_payment_does_not_log_the_signature() {
    let harness = TestHarness::builder().build().await.unwrap();
    let booking = harness.bookings.create(request()).await.unwrap();

    harness
        .payments
        .verify_payment(VerifyPayment {
            order_id: Some("order_abc".into()),
            payment_id: Some("pay_456".into()),
            signature: Some("sig_c0ffee_secret".into()),
            booking_id: Some(booking.id.clone()),
        })
        .await
        .unwrap();

    assert!(logs_contain("signature_present=true"));
    assert!(!logs_contain("sig_c0ffee_secret"));
}

#[tokio::test]
async fn verify_payment_for_unknown_booking_is_not_found() {
    let harness = TestHarness::builder().build().await.unwrap();
    let err = harness
        .payments
        .verify_payment(VerifyPayment {
            order_id: Some("order_x".into()),
            payment_id: Some("pay_x".into()),
            signature: None,
            booking_id: Some("missing".into()),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn verify_payment_names_missing_fields() {
    let harness = TestHarness::builder().build().await.unwrap();
    let err = harness
        .payments
        .verify_payment(VerifyPayment::default())
        .await
        .unwrap_err();
    match err {
        CourierError::Validation { fields, .. } => {
            assert_eq!(fields, vec!["orderId", "paymentId", "bookingId"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
