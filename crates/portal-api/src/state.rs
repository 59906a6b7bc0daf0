//! Shared application state.

use std::sync::Arc;

use axum::http::HeaderValue;

use portal_core::clock::Clock;
use portal_core::search::SearchIndex;
use portal_core::store::EventStore;

use crate::error::AppError;

/// Static configuration every handler needs.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Value of the `Access-Control-Allow-Origin` response header.
    pub allow_origin: HeaderValue,
}

impl ApiConfig {
    /// Builds the configuration from the allowed web origin.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the origin is not a valid header value.
    pub fn new(web_origin: &str) -> Result<Self, AppError> {
        let allow_origin = HeaderValue::from_str(web_origin)
            .map_err(|e| AppError::Config(format!("invalid WEB_ORIGIN value: {e}")))?;
        Ok(Self { allow_origin })
    }
}

/// Application state shared across all request handlers. Adapters are owned
/// here and injected; handlers never construct clients themselves.
#[derive(Clone)]
pub struct AppState {
    /// The Event document store.
    pub store: Arc<dyn EventStore>,
    /// The search index the List operation reads from.
    pub search: Arc<dyn SearchIndex>,
    /// Time source for audit fields.
    pub clock: Arc<dyn Clock>,
    /// Static configuration.
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        store: Arc<dyn EventStore>,
        search: Arc<dyn SearchIndex>,
        clock: Arc<dyn Clock>,
        config: ApiConfig,
    ) -> Self {
        Self {
            store,
            search,
            clock,
            config: Arc::new(config),
        }
    }
}
