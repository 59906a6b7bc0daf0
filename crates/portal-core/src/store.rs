//! Event store abstraction.
//!
//! The backing store is a document table keyed by `eventId` with a secondary
//! uniqueness index on `seoUrl`. Handlers only ever see this trait; the
//! DynamoDB implementation lives in `portal-event-store`.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::PortalError;
use crate::event::{EventPayload, EventRecord, EventStatus};

/// The wholesale field replacement an Update performs: every client-supplied
/// field plus the `updatedAt`/`updatedBy` audit pair. `eventId`,
/// `isDeleted`, `createdAt`, and `createdBy` are never part of an update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
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

    pub updated_at: String,
    pub updated_by: Option<String>,
}

impl EventUpdate {
    /// Builds an update from a validated payload and the audit pair.
    #[must_use]
    pub fn from_payload(
        payload: EventPayload,
        status: EventStatus,
        updated_at: String,
        updated_by: Option<String>,
    ) -> Self {
        Self {
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
            updated_at,
            updated_by,
        }
    }

    /// Applies the replacement to a stored record, preserving the identity
    /// fields. The in-memory store uses this directly; the DynamoDB adapter
    /// expresses the same rule as an update expression.
    pub fn apply(&self, record: &mut EventRecord) {
        record.title = self.title.clone();
        record.short_description = self.short_description.clone();
        record.long_description = self.long_description.clone();
        record.media = self.media.clone();
        record.status = self.status;
        record.is_highlighted = self.is_highlighted;
        record.region = self.region.clone();
        record.venue = self.venue.clone();
        record.display_venue = self.display_venue.clone();
        record.event_date = self.event_date.clone();
        record.display_date = self.display_date.clone();
        record.opening_hours = self.opening_hours.clone();
        record.admission = self.admission.clone();
        record.display_admission = self.display_admission.clone();
        record.organizer = self.organizer.clone();
        record.category = self.category.clone();
        record.topic = self.topic.clone();
        record.seo_url = self.seo_url.clone();
        record.ticket_url = self.ticket_url.clone();
        record.website_url = self.website_url.clone();
        record.facebook_url = self.facebook_url.clone();
        record.instagram_url = self.instagram_url.clone();
        record.updated_at = self.updated_at.clone();
        record.updated_by = self.updated_by.clone();
    }
}

/// Keyed point lookups, conditional writes, and partial updates against the
/// Event table.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Point lookup by primary key.
    async fn get(&self, event_id: &str) -> Result<Option<EventRecord>, PortalError>;

    /// Unconditional insert/overwrite of a full record.
    async fn put(&self, record: &EventRecord) -> Result<(), PortalError>;

    /// Wholesale field replacement keyed by `event_id`, returning the
    /// post-update record, or `None` when no record with that key exists.
    async fn update(
        &self,
        event_id: &str,
        update: &EventUpdate,
    ) -> Result<Option<EventRecord>, PortalError>;

    /// Soft delete: sets `isDeleted = true` plus the audit pair, leaving
    /// every other field untouched. Returns `false` when no record with
    /// that key exists.
    async fn mark_deleted(
        &self,
        event_id: &str,
        updated_at: &str,
        updated_by: Option<&str>,
    ) -> Result<bool, PortalError>;

    /// Equality query on the `seoUrl` secondary index. Soft-deleted records
    /// are included; slug uniqueness spans ALL events. When
    /// `exclude_event_id` is given, records with that primary key are
    /// filtered out (Update checking against everyone but itself).
    async fn find_by_seo_url(
        &self,
        seo_url: &str,
        exclude_event_id: Option<&str>,
    ) -> Result<Vec<EventRecord>, PortalError>;
}
