//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use portal_api::headers::security_headers;
use portal_api::routes;
use portal_api::state::{ApiConfig, AppState};
use portal_core::clock::Clock;
use portal_core::event::{EventPayload, EventRecord, EventStatus};
use portal_core::search::SearchIndex;
use portal_core::store::EventStore;
use portal_test_support::FixedClock;

/// What the fixed test clock renders to in audit fields.
pub const FIXED_TIMESTAMP: &str = "2026-01-15T10:00:00.000000Z";

/// Origin every test app is configured with.
pub const TEST_ORIGIN: &str = "https://admin.example.com";

/// Timestamp pre-seeded records were "created" at.
pub const SEED_TIMESTAMP: &str = "2025-06-01T08:00:00.000000Z";

/// Build the full app router with the given adapters and a fixed clock.
/// Uses the same route and middleware structure as `main.rs`.
pub fn build_test_app(store: Arc<dyn EventStore>, search: Arc<dyn SearchIndex>) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ));
    let config = ApiConfig::new(TEST_ORIGIN).unwrap();
    let state = AppState::new(store, search, clock, config);

    Router::new()
        .merge(routes::health::router())
        .nest("/admin/events", routes::events::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            security_headers,
        ))
        .with_state(state)
}

/// Send a request and return status, parsed JSON body, and headers. An
/// empty body parses to `Value::Null`.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
    caller_email: Option<&str>,
) -> (StatusCode, serde_json::Value, HeaderMap) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(email) = caller_email {
        builder = builder.header("x-caller-email", email);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json, headers)
}

/// POST a JSON body with an optional caller identity header.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    caller_email: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (status, json, _) = send(app, "POST", uri, Some(body), caller_email).await;
    (status, json)
}

/// POST a raw body with an explicit content type, bypassing JSON encoding.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_owned()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// PUT a JSON body with an optional caller identity header.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    caller_email: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (status, json, _) = send(app, "PUT", uri, Some(body), caller_email).await;
    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, json, _) = send(app, "GET", uri, None, None).await;
    (status, json)
}

/// Send a DELETE request with an optional caller identity header.
pub async fn delete_json(
    app: Router,
    uri: &str,
    caller_email: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (status, json, _) = send(app, "DELETE", uri, None, caller_email).await;
    (status, json)
}

/// A full, valid create/update payload.
pub fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "title": "Summer Fair",
        "shortDescription": "A neighborhood fair",
        "longDescription": "A long weekend of stalls and music.",
        "media": [{ "type": "image", "url": "https://cdn.example.com/fair.jpg" }],
        "status": "ACTIVE",
        "isHighlighted": true,
        "region": "North",
        "venue": "Town Hall",
        "displayVenue": "The Town Hall",
        "eventDate": "2026-06-01",
        "displayDate": "1 June 2026",
        "openingHours": "10:00-18:00",
        "admission": "FREE",
        "displayAdmission": "Free entry",
        "organizer": "City Council",
        "category": "Community",
        "tag": "family",
        "seoUrl": "summer-fair",
        "websiteUrl": "https://fair.example.com"
    })
}

/// A record as it would already exist in the store before the test runs.
pub fn stored_event(event_id: &str, seo_url: &str) -> EventRecord {
    EventRecord::create(
        event_id.to_owned(),
        EventPayload {
            title: Some("Stored Event".to_owned()),
            seo_url: Some(seo_url.to_owned()),
            venue: Some("Town Hall".to_owned()),
            ..EventPayload::default()
        },
        EventStatus::Active,
        SEED_TIMESTAMP.to_owned(),
        Some("creator@example.com".to_owned()),
    )
}
