// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API tests driven through the router with `oneshot`.

use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use courier_config::model::ServerConfig;
use courier_gateway::{build_router, GatewayState, ServiceInfo};
use courier_test_utils::TestHarness;

struct TestApp {
    router: Router,
    _harness: TestHarness,
}

async fn app_with(config: ServerConfig) -> TestApp {
    let harness = TestHarness::builder()
        .with_payment_key("rzp_test_123")
        .build()
        .await
        .unwrap();
    let state = GatewayState {
        bookings: harness.bookings.clone(),
        contacts: harness.contacts.clone(),
        payments: harness.payments.clone(),
        storage: harness.storage.clone(),
        default_distance: "local".to_string(),
        info: ServiceInfo {
            name: "courier".to_string(),
            version: "0.1.0".to_string(),
            api_prefix: config.api_prefix.clone(),
            start_time: Instant::now(),
        },
    };
    TestApp {
        router: build_router(&config, state),
        _harness: harness,
    }
}

async fn app() -> TestApp {
    app_with(ServerConfig::default()).await
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

fn booking_body() -> Value {
    json!({
        "senderName": "Asha Verma",
        "senderPhone": "9000000001",
        "senderAddress": "12 MG Road, Pune",
        "receiverName": "Ravi Kumar",
        "receiverPhone": "9000000002",
        "receiverAddress": "4 Park Street, Kolkata",
        "packageType": "document",
        "packageWeight": "5",
        "packageDescription": "Contracts"
    })
}

#[tokio::test]
async fn create_then_track_booking() {
    let app = app().await;
    let (status, created) = app.send("POST", "/api/bookings", Some(booking_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["message"], "Booking created successfully");
    assert_eq!(created["booking"]["status"], "pending");
    assert_eq!(created["booking"]["price"], 150);
    let tracking = created["trackingNumber"].as_str().unwrap().to_string();
    assert_eq!(created["booking"]["trackingNumber"], tracking.as_str());

    let uri = format!("/api/bookings/track/{}", tracking.to_lowercase());
    let (status, tracked) = app.send("GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tracked["booking"]["trackingNumber"], tracking.as_str());
    assert_eq!(tracked["booking"]["senderName"], "Asha Verma");
    let history = tracked["booking"]["trackingHistory"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["location"], "Processing request");
}

#[tokio::test]
async fn missing_fields_are_rejected_with_400() {
    let app = app().await;
    let mut body = booking_body();
    body.as_object_mut().unwrap().remove("senderName");
    body["packageWeight"] = json!(0.05);

    let (status, error) = app.send("POST", "/api/bookings", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["success"], false);
    let detail = error["error"].as_str().unwrap();
    assert!(detail.contains("senderName"));
    assert!(detail.contains("packageWeight"));
}

#[tokio::test]
async fn malformed_json_is_400_envelope() {
    let app = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/bookings")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_tracking_number_is_404() {
    let app = app().await;
    let (status, body) = app
        .send("GET", "/api/bookings/track/SC000000AAAAAA", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tracking number not found");
}

#[tokio::test]
async fn status_update_appends_history() {
    let app = app().await;
    let (_, created) = app.send("POST", "/api/bookings", Some(booking_body())).await;
    let id = created["booking"]["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/api/bookings/{id}/status"),
            Some(json!({"status": "in-transit", "location": "Mumbai hub"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Status updated successfully");
    assert_eq!(updated["booking"]["status"], "in-transit");
    let history = updated["booking"]["trackingHistory"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1]["location"], "Mumbai hub");

    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/bookings/{id}/status"),
            Some(json!({"status": "teleported"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .send(
            "PUT",
            "/api/bookings/missing/status",
            Some(json!({"status": "delivered"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Booking not found");
}

#[tokio::test]
async fn list_get_and_delete() {
    let app = app().await;
    let (_, first) = app.send("POST", "/api/bookings", Some(booking_body())).await;
    let (_, second) = app.send("POST", "/api/bookings", Some(booking_body())).await;

    let (status, list) = app.send("GET", "/api/bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["count"], 2);
    assert_eq!(list["bookings"][0]["id"], second["booking"]["id"]);

    let id = first["booking"]["id"].as_str().unwrap().to_string();
    let (status, fetched) = app.send("GET", &format!("/api/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["booking"]["id"], id.as_str());

    let (status, deleted) = app
        .send("DELETE", &format!("/api/bookings/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Booking deleted successfully");

    let (status, _) = app.send("GET", &format!("/api/bookings/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_flow() {
    let app = app().await;
    let (status, created) = app
        .send(
            "POST",
            "/api/contact",
            Some(json!({
                "name": "Meera",
                "email": "meera@example.com",
                "message": "Do you ship to Goa?"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Message sent successfully");
    let id = created["contact"]["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/api/contact/{id}/status"),
            Some(json!({"status": "read"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["contact"]["status"], "read");

    let (status, fetched) = app.send("GET", &format!("/api/contact/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["contact"]["email"], "meera@example.com");
    assert_eq!(fetched["contact"]["status"], "read");

    let (status, body) = app.send("GET", "/api/contact/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact message not found");

    let (_, list) = app.send("GET", "/api/contact", None).await;
    assert_eq!(list["count"], 1);

    let (status, body) = app
        .send(
            "PUT",
            "/api/contact/missing/status",
            Some(json!({"status": "read"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact message not found");

    let (status, _) = app
        .send(
            "POST",
            "/api/contact",
            Some(json!({"name": "X", "email": "nope", "message": "hi"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calculate_cost_matches_quotation_table() {
    let app = app().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/payments/calculate-cost",
            Some(json!({"packageType": "fragile", "packageWeight": 5, "distance": "international"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cost"], 1800);
    assert_eq!(body["breakdown"]["baseCost"], 1500);
    assert_eq!(body["breakdown"]["weightCost"], 100.0);

    let (status, body) = app
        .send(
            "POST",
            "/api/payments/calculate-cost",
            Some(json!({"packageType": "mystery", "packageWeight": "2"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cost"], 190);

    let (status, _) = app
        .send(
            "POST",
            "/api/payments/calculate-cost",
            Some(json!({"packageType": "document", "packageWeight": "lots"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_and_verify_payment() {
    let app = app().await;
    let (_, created) = app.send("POST", "/api/bookings", Some(booking_body())).await;
    let id = created["booking"]["id"].as_str().unwrap().to_string();

    let (status, order) = app
        .send(
            "POST",
            "/api/payments/create-order",
            Some(json!({"bookingId": id, "amount": 150})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["amount"], 15000);
    assert_eq!(order["currency"], "INR");
    assert_eq!(order["key"], "rzp_test_123");
    let order_id = order["orderId"].as_str().unwrap().to_string();

    let (status, verified) = app
        .send(
            "POST",
            "/api/payments/verify-payment",
            Some(json!({
                "orderId": order_id,
                "paymentId": "pay_42",
                "signature": "sig",
                "bookingId": id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["message"], "Payment verified successfully");
    assert_eq!(verified["booking"]["paymentStatus"], "paid");
    assert_eq!(verified["booking"]["status"], "pending");

    let (status, _) = app
        .send(
            "POST",
            "/api/payments/create-order",
            Some(json!({"bookingId": id, "amount": 0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_is_served_at_root_and_under_prefix() {
    let app = app().await;
    for uri in ["/health", "/api/health"] {
        let (status, body) = app.send("GET", uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["database"], "Connected");
    }
}

#[tokio::test]
async fn banner_lists_prefixed_routes() {
    let app = app().await;
    let (status, body) = app.send("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let routes: Vec<&str> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(routes.contains(&"POST   /api/bookings"));
}

#[tokio::test]
async fn empty_prefix_mounts_at_root() {
    let app = app_with(ServerConfig {
        api_prefix: String::new(),
        ..ServerConfig::default()
    })
    .await;
    let (status, _) = app.send("GET", "/bookings", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn serves_assets_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Courier</h1>").unwrap();
    let app = app_with(ServerConfig {
        serve_assets: true,
        assets_dir: dir.path().to_string_lossy().to_string(),
        ..ServerConfig::default()
    })
    .await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>Courier</h1>");
}

#[tokio::test]
async fn cors_preflight_honours_configured_origin() {
    let app = app_with(ServerConfig {
        allowed_origins: vec!["https://courier.example".to_string()],
        ..ServerConfig::default()
    })
    .await;
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/bookings")
        .header("origin", "https://courier.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://courier.example"
    );
}
