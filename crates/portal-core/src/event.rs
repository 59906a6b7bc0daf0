//! The Event record model.
//!
//! An Event is the sole entity of the admin API. Everything except
//! `eventId`, `status`, `isDeleted`, and the audit fields is free-form
//! display content that the handlers pass through verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Publication status of an Event. Any other value in a payload is a
/// validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventStatus {
    Active,
    Inactive,
}

impl EventStatus {
    /// The wire representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Client-supplied portion of an Event, shared by the Create and Update
/// request schemas. Absent fields are `None`, never a deserialization error.
///
/// `topic` also accepts the legacy `tag` spelling used by create payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPayload {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    /// Arbitrary media descriptor list, stored verbatim.
    pub media: Option<Value>,
    pub status: Option<EventStatus>,
    pub is_highlighted: Option<bool>,

    pub region: Option<String>,
    pub venue: Option<String>,
    pub display_venue: Option<String>,
    pub event_date: Option<String>,
    pub display_date: Option<String>,
    pub opening_hours: Option<String>,
    pub admission: Option<String>,
    pub display_admission: Option<String>,

    pub organizer: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "tag")]
    pub topic: Option<String>,

    pub seo_url: Option<String>,
    pub ticket_url: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
}

/// A stored Event, exactly as it is written to and read from the store.
///
/// `event_id` is assigned once by Create and never recomputed. The audit
/// fields are server-assigned; clients cannot supply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub event_id: String,

    pub title: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub media: Option<Value>,
    pub status: EventStatus,
    pub is_highlighted: Option<bool>,

    pub region: Option<String>,
    pub venue: Option<String>,
    pub display_venue: Option<String>,
    pub event_date: Option<String>,
    pub display_date: Option<String>,
    pub opening_hours: Option<String>,
    pub admission: Option<String>,
    pub display_admission: Option<String>,

    pub organizer: Option<String>,
    pub category: Option<String>,
    pub topic: Option<String>,

    pub seo_url: Option<String>,
    pub ticket_url: Option<String>,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,

    pub is_deleted: bool,
    pub created_at: String,
    pub created_by: Option<String>,
    pub updated_at: String,
    pub updated_by: Option<String>,
}

impl EventRecord {
    /// Builds a brand-new Event from a validated payload.
    ///
    /// Sets `is_deleted = false` and mirrors `now` / `created_by` into both
    /// halves of the audit pair.
    #[must_use]
    pub fn create(
        event_id: String,
        payload: EventPayload,
        status: EventStatus,
        now: String,
        created_by: Option<String>,
    ) -> Self {
        Self {
            event_id,
            title: payload.title,
            short_description: payload.short_description,
            long_description: payload.long_description,
            media: payload.media,
            status,
            is_highlighted: payload.is_highlighted,
            region: payload.region,
            venue: payload.venue,
            display_venue: payload.display_venue,
            event_date: payload.event_date,
            display_date: payload.display_date,
            opening_hours: payload.opening_hours,
            admission: payload.admission,
            display_admission: payload.display_admission,
            organizer: payload.organizer,
            category: payload.category,
            topic: payload.topic,
            seo_url: payload.seo_url,
            ticket_url: payload.ticket_url,
            website_url: payload.website_url,
            facebook_url: payload.facebook_url,
            instagram_url: payload.instagram_url,
            is_deleted: false,
            created_at: now.clone(),
            created_by: created_by.clone(),
            updated_at: now,
            updated_by: created_by,
        }
    }
}

/// The projection the List operation returns per hit — a strict subset of
/// the full schema that omits long-form fields and deletion metadata.
///
/// Fields absent from an index document stay absent in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_admission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}
