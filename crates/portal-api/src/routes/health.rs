//! Liveness probe.
//!
//! Deploy tooling polls this route. It reports the running build only and
//! deliberately touches neither the store nor the index.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Probe body: fixed status plus the version baked in at compile time.
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the probe router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
