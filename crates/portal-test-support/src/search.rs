//! Test search indexes — stub and always-failing `SearchIndex`
//! implementations.

use std::sync::Mutex;

use async_trait::async_trait;

use portal_core::error::PortalError;
use portal_core::search::{EventSearchQuery, SearchIndex, SearchPage};

/// A search index that returns a configured page from every call and records
/// each query it receives for later assertions.
#[derive(Debug, Default)]
pub struct StubSearchIndex {
    page: SearchPage,
    queries: Mutex<Vec<EventSearchQuery>>,
}

impl StubSearchIndex {
    /// Creates a stub that answers every search with `page`.
    #[must_use]
    pub fn new(page: SearchPage) -> Self {
        Self {
            page,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all queries received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn recorded_queries(&self) -> Vec<EventSearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchIndex for StubSearchIndex {
    async fn search_events(&self, query: &EventSearchQuery) -> Result<SearchPage, PortalError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.page.clone())
    }
}

/// A search index that always returns an infrastructure error.
#[derive(Debug, Default)]
pub struct FailingSearchIndex;

#[async_trait]
impl SearchIndex for FailingSearchIndex {
    async fn search_events(&self, _query: &EventSearchQuery) -> Result<SearchPage, PortalError> {
        Err(PortalError::Infrastructure("connection refused".into()))
    }
}
