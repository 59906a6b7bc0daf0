//! Integration tests for the List Events endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use portal_core::event::{EventStatus, EventSummary};
use portal_core::search::{SearchIndex, SearchPage};
use portal_test_support::{FailingSearchIndex, InMemoryEventStore, StubSearchIndex};

fn app_with(search: Arc<dyn SearchIndex>) -> axum::Router {
    common::build_test_app(Arc::new(InMemoryEventStore::new()), search)
}

fn summary(event_id: &str, title: &str) -> EventSummary {
    EventSummary {
        event_id: Some(event_id.to_owned()),
        title: Some(title.to_owned()),
        status: Some(EventStatus::Active),
        ..EventSummary::default()
    }
}

#[tokio::test]
async fn test_list_events_applies_defaults() {
    let search = Arc::new(StubSearchIndex::new(SearchPage {
        items: vec![summary("id-1", "Autumn Fest"), summary("id-2", "Book Swap")],
        total: 2,
    }));
    let app = app_with(search.clone());

    let (status, json) =
        common::post_json(app, "/admin/events/search", &serde_json::json!({}), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["nextToken"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["eventId"], "id-1");
    // Absent summary fields are omitted, not serialized as null.
    assert!(json["items"][0].get("venue").is_none());

    let queries = search.recorded_queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].limit, 1000);
    assert_eq!(queries[0].offset, 0);
    assert_eq!(queries[0].sort.field, "title");
    assert_eq!(queries[0].sort.direction, "asc");
}

#[tokio::test]
async fn test_list_events_accepts_empty_body() {
    let search = Arc::new(StubSearchIndex::new(SearchPage::default()));
    let app = app_with(search.clone());

    let (status, json, _) = common::send(app, "POST", "/admin/events/search", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
    assert_eq!(json["nextToken"], 0);
    assert_eq!(search.recorded_queries()[0].limit, 1000);
}

#[tokio::test]
async fn test_list_events_rejects_malformed_json_body() {
    let search = Arc::new(StubSearchIndex::new(SearchPage::default()));
    let app = app_with(search.clone());

    let (status, json) = common::post_raw(
        app,
        "/admin/events/search",
        "application/json",
        "{\"limit\": ",
    )
    .await;

    // A broken body must not silently fall back to a default listing.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid Parameters");
    assert!(search.recorded_queries().is_empty());
}

#[tokio::test]
async fn test_list_events_rejects_wrongly_typed_fields() {
    let search = Arc::new(StubSearchIndex::new(SearchPage::default()));
    let app = app_with(search.clone());

    let (status, json) = common::post_raw(
        app,
        "/admin/events/search",
        "application/json",
        "{\"limit\": \"ten\"}",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid Parameters");
    assert!(search.recorded_queries().is_empty());
}

#[tokio::test]
async fn test_list_events_full_page_advances_token_by_limit() {
    let search = Arc::new(StubSearchIndex::new(SearchPage {
        items: vec![summary("id-5", "E5"), summary("id-6", "E6")],
        total: 9,
    }));
    let app = app_with(search.clone());

    let body = serde_json::json!({ "limit": 2, "nextToken": 4 });
    let (status, json) = common::post_json(app, "/admin/events/search", &body, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 9);
    assert_eq!(json["nextToken"], 6);

    let queries = search.recorded_queries();
    assert_eq!(queries[0].limit, 2);
    assert_eq!(queries[0].offset, 4);
}

#[tokio::test]
async fn test_list_events_partial_page_advances_token_by_count() {
    let search = Arc::new(StubSearchIndex::new(SearchPage {
        items: vec![summary("id-5", "E5"), summary("id-6", "E6")],
        total: 6,
    }));
    let app = app_with(search);

    let body = serde_json::json!({ "limit": 3, "nextToken": 4 });
    let (status, json) = common::post_json(app, "/admin/events/search", &body, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["nextToken"], 6);
}

#[tokio::test]
async fn test_list_events_empty_page_keeps_token_at_offset() {
    let search = Arc::new(StubSearchIndex::new(SearchPage {
        items: vec![],
        total: 4,
    }));
    let app = app_with(search);

    let body = serde_json::json!({ "limit": 10, "nextToken": 4 });
    let (status, json) = common::post_json(app, "/admin/events/search", &body, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["nextToken"], 4);
}

#[tokio::test]
async fn test_list_events_passes_sort_through() {
    let search = Arc::new(StubSearchIndex::new(SearchPage::default()));
    let app = app_with(search.clone());

    let body = serde_json::json!({ "sort": { "field": "eventDate", "direction": "desc" } });
    let (status, _) = common::post_json(app, "/admin/events/search", &body, None).await;

    assert_eq!(status, StatusCode::OK);
    let queries = search.recorded_queries();
    // Sort fields reach the index untranslated; keyword rewriting happens in
    // the index adapter, not the handler.
    assert_eq!(queries[0].sort.field, "eventDate");
    assert_eq!(queries[0].sort.direction, "desc");
}

#[tokio::test]
async fn test_list_events_index_failure_returns_generic_500() {
    let app = app_with(Arc::new(FailingSearchIndex));

    let (status, json) =
        common::post_json(app, "/admin/events/search", &serde_json::json!({}), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json["message"],
        "Something went wrong. Please try again later."
    );
}
