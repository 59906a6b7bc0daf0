//! Test stores — in-memory and always-failing `EventStore` implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use portal_core::error::PortalError;
use portal_core::event::EventRecord;
use portal_core::store::{EventStore, EventUpdate};

/// An event store backed by a plain map. Honors the same update and
/// soft-delete rules as the DynamoDB adapter by going through
/// `EventUpdate::apply`, so handler tests exercise the real replacement
/// semantics.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    records: Mutex<HashMap<String, EventRecord>>,
}

impl InMemoryEventStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with the given records.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_records(records: Vec<EventRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.lock().unwrap();
            for record in records {
                map.insert(record.event_id.clone(), record);
            }
        }
        store
    }

    /// Returns a snapshot of the stored record with the given id, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn record(&self, event_id: &str) -> Option<EventRecord> {
        self.records.lock().unwrap().get(event_id).cloned()
    }

    /// Number of stored records.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Whether the store holds no records.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn get(&self, event_id: &str) -> Result<Option<EventRecord>, PortalError> {
        Ok(self.records.lock().unwrap().get(event_id).cloned())
    }

    async fn put(&self, record: &EventRecord) -> Result<(), PortalError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.event_id.clone(), record.clone());
        Ok(())
    }

    async fn update(
        &self,
        event_id: &str,
        update: &EventUpdate,
    ) -> Result<Option<EventRecord>, PortalError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.get_mut(event_id) else {
            return Ok(None);
        };
        update.apply(record);
        Ok(Some(record.clone()))
    }

    async fn mark_deleted(
        &self,
        event_id: &str,
        updated_at: &str,
        updated_by: Option<&str>,
    ) -> Result<bool, PortalError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.get_mut(event_id) else {
            return Ok(false);
        };
        record.is_deleted = true;
        record.updated_at = updated_at.to_owned();
        record.updated_by = updated_by.map(ToOwned::to_owned);
        Ok(true)
    }

    async fn find_by_seo_url(
        &self,
        seo_url: &str,
        exclude_event_id: Option<&str>,
    ) -> Result<Vec<EventRecord>, PortalError> {
        // Slug uniqueness spans soft-deleted records too; no isDeleted filter.
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|record| record.seo_url.as_deref() == Some(seo_url))
            .filter(|record| exclude_event_id != Some(record.event_id.as_str()))
            .cloned()
            .collect())
    }
}

/// An event store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug, Default)]
pub struct FailingEventStore;

#[async_trait]
impl EventStore for FailingEventStore {
    async fn get(&self, _event_id: &str) -> Result<Option<EventRecord>, PortalError> {
        Err(PortalError::Infrastructure("connection refused".into()))
    }

    async fn put(&self, _record: &EventRecord) -> Result<(), PortalError> {
        Err(PortalError::Infrastructure("connection refused".into()))
    }

    async fn update(
        &self,
        _event_id: &str,
        _update: &EventUpdate,
    ) -> Result<Option<EventRecord>, PortalError> {
        Err(PortalError::Infrastructure("connection refused".into()))
    }

    async fn mark_deleted(
        &self,
        _event_id: &str,
        _updated_at: &str,
        _updated_by: Option<&str>,
    ) -> Result<bool, PortalError> {
        Err(PortalError::Infrastructure("connection refused".into()))
    }

    async fn find_by_seo_url(
        &self,
        _seo_url: &str,
        _exclude_event_id: Option<&str>,
    ) -> Result<Vec<EventRecord>, PortalError> {
        Err(PortalError::Infrastructure("connection refused".into()))
    }
}
