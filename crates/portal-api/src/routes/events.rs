//! Admin Event endpoints: create, get, update, delete, and search-backed
//! listing.
//!
//! Validation order matters and mirrors the documented contract: parameter
//! checks first, then the slug uniqueness check, then the store write. The
//! uniqueness check is read-then-write with no transactional guarantee; two
//! concurrent writers with the same slug can both pass it.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portal_core::clock::format_timestamp;
use portal_core::error::PortalError;
use portal_core::event::{EventPayload, EventRecord, EventSummary};
use portal_core::search::{EventSearchQuery, SortSpec};
use portal_core::store::EventUpdate;

use crate::error::ApiError;
use crate::identity::CallerIdentity;
use crate::state::AppState;

const DEFAULT_LIMIT: u64 = 1000;
const DEFAULT_SORT_FIELD: &str = "title";
const DEFAULT_SORT_DIRECTION: &str = "asc";

fn invalid_parameters() -> ApiError {
    ApiError(PortalError::BadRequest("Invalid Parameters".to_owned()))
}

fn seo_url_exists() -> ApiError {
    ApiError(PortalError::BadRequest("SeoUrl already exists.".to_owned()))
}

fn event_not_found() -> ApiError {
    ApiError(PortalError::NotFound("Event Not Found.".to_owned()))
}

/// Lookup parameter for Get and Delete.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventIdParams {
    pub event_id: Option<String>,
}

/// Update payload: the full field set plus the id of the record to replace.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(flatten)]
    pub payload: EventPayload,
}

/// Listing request. Every field is optional; an absent body means all
/// defaults. `nextToken` is a numeric offset, not an opaque cursor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsRequest {
    pub limit: Option<u64>,
    pub next_token: Option<u64>,
    pub sort: Option<SortRequest>,
}

/// Requested sort order for a listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SortRequest {
    pub field: Option<String>,
    pub direction: Option<String>,
}

/// Listing response page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
    pub items: Vec<EventSummary>,
    pub total: u64,
    pub next_token: u64,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /admin/events
///
/// Creates a new Event: assigns a fresh id, stamps the audit fields, and
/// rejects the write when the slug is already taken — by any event,
/// soft-deleted ones included.
pub async fn create_event(
    State(state): State<AppState>,
    identity: CallerIdentity,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Json<EventRecord>, ApiError> {
    let Json(payload) = payload.map_err(|_| invalid_parameters())?;
    let Some(status) = payload.status else {
        return Err(invalid_parameters());
    };

    if let Some(seo_url) = payload.seo_url.as_deref() {
        if !state.store.find_by_seo_url(seo_url, None).await?.is_empty() {
            return Err(seo_url_exists());
        }
    }

    let now = format_timestamp(state.clock.now());
    let record = EventRecord::create(
        Uuid::new_v4().to_string(),
        payload,
        status,
        now,
        identity.0,
    );
    state.store.put(&record).await?;

    tracing::info!(event_id = %record.event_id, "event created");
    Ok(Json(record))
}

/// GET /admin/events?eventId=…
pub async fn get_event(
    State(state): State<AppState>,
    Query(params): Query<EventIdParams>,
) -> Result<Json<EventRecord>, ApiError> {
    let Some(event_id) = params.event_id.filter(|id| !id.is_empty()) else {
        return Err(invalid_parameters());
    };

    let record = state
        .store
        .get(&event_id)
        .await?
        .ok_or_else(event_not_found)?;

    Ok(Json(record))
}

/// PUT /admin/events
///
/// Replaces every payload field of an existing Event plus the
/// `updatedAt`/`updatedBy` pair. `eventId`, `isDeleted`, `createdAt`, and
/// `createdBy` are preserved. The slug check excludes the record itself so
/// an Event may keep its own slug.
pub async fn update_event(
    State(state): State<AppState>,
    identity: CallerIdentity,
    request: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<EventRecord>, ApiError> {
    let Json(request) = request.map_err(|_| invalid_parameters())?;
    let Some(event_id) = request.event_id.filter(|id| !id.is_empty()) else {
        return Err(invalid_parameters());
    };
    let payload = request.payload;
    let Some(status) = payload.status else {
        return Err(invalid_parameters());
    };

    if let Some(seo_url) = payload.seo_url.as_deref() {
        if !state
            .store
            .find_by_seo_url(seo_url, Some(&event_id))
            .await?
            .is_empty()
        {
            return Err(seo_url_exists());
        }
    }

    let now = format_timestamp(state.clock.now());
    let update = EventUpdate::from_payload(payload, status, now, identity.0);
    let record = state
        .store
        .update(&event_id, &update)
        .await?
        .ok_or_else(|| PortalError::Infrastructure("Failed to update Event.".to_owned()))?;

    tracing::info!(event_id = %record.event_id, "event updated");
    Ok(Json(record))
}

/// DELETE /admin/events?eventId=…
///
/// Soft delete: flips `isDeleted` and stamps the audit pair, leaving every
/// other field in place. A missing record is a 404, not a silent upsert.
pub async fn delete_event(
    State(state): State<AppState>,
    identity: CallerIdentity,
    Query(params): Query<EventIdParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(event_id) = params.event_id.filter(|id| !id.is_empty()) else {
        return Err(invalid_parameters());
    };

    let now = format_timestamp(state.clock.now());
    if !state
        .store
        .mark_deleted(&event_id, &now, identity.0.as_deref())
        .await?
    {
        return Err(event_not_found());
    }

    tracing::info!(%event_id, "event soft-deleted");
    Ok(Json(MessageResponse {
        message: "Successfully deleted Event.",
    }))
}

/// POST /admin/events/search
///
/// Lists non-deleted events from the search index. An absent body means all
/// defaults; a body that claims to be JSON but does not parse is rejected.
/// The response `nextToken` advances by `limit` when the page came back
/// full, otherwise by the number of items actually returned.
pub async fn list_events(
    State(state): State<AppState>,
    request: Result<Json<ListEventsRequest>, JsonRejection>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let request = match request {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => ListEventsRequest::default(),
        Err(_) => return Err(invalid_parameters()),
    };

    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = request.next_token.unwrap_or(0);
    let sort = request.sort.unwrap_or_default();
    let query = EventSearchQuery {
        sort: SortSpec {
            field: sort.field.unwrap_or_else(|| DEFAULT_SORT_FIELD.to_owned()),
            direction: sort
                .direction
                .unwrap_or_else(|| DEFAULT_SORT_DIRECTION.to_owned()),
        },
        limit,
        offset,
    };

    let page = state.search.search_events(&query).await?;

    let count = page.items.len() as u64;
    let next_token = if count == limit {
        offset + limit
    } else {
        offset + count
    };

    Ok(Json(ListEventsResponse {
        items: page.items,
        total: page.total,
        next_token,
    }))
}

/// Returns the router for the admin Event endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_event)
                .get(get_event)
                .put(update_event)
                .delete(delete_event),
        )
        .route("/search", post(list_events))
}
