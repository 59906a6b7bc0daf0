//! Search index abstraction.
//!
//! The index is an eventually-consistent read replica of the Event store,
//! used only by the List operation. Population of the index is external.

use async_trait::async_trait;

use crate::error::PortalError;
use crate::event::EventSummary;

/// Sort specification for a listing query. `direction` is passed through to
/// the index verbatim (`asc`/`desc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: String,
}

/// A filtered, sorted, paginated listing query. `offset` is a plain numeric
/// document offset, not an opaque cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSearchQuery {
    pub sort: SortSpec,
    pub limit: u64,
    pub offset: u64,
}

/// One page of index hits plus the index's reported total match count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub items: Vec<EventSummary>,
    pub total: u64,
}

/// Read access to the search index.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Runs a listing query over non-deleted events.
    async fn search_events(&self, query: &EventSearchQuery) -> Result<SearchPage, PortalError>;
}
