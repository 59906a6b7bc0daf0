//! Portal admin API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use portal_api::headers;
use portal_api::routes;
use portal_api::state::{ApiConfig, AppState};
use portal_core::clock::SystemClock;
use portal_event_store::DynamoDbEventStore;
use portal_search::EsSearchIndex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting portal admin API server");

    // Read configuration from environment.
    let web_origin = std::env::var("WEB_ORIGIN")
        .map_err(|_| "WEB_ORIGIN environment variable must be set")?;
    let event_table = std::env::var("EVENT_TABLE")
        .map_err(|_| "EVENT_TABLE environment variable must be set")?;
    let es_endpoint = std::env::var("ES_DOMAIN_ENDPOINT")
        .map_err(|_| "ES_DOMAIN_ENDPOINT environment variable must be set")?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;

    // Build the store and index adapters from the ambient AWS environment.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = Arc::new(DynamoDbEventStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        event_table,
    ));
    let region = aws_config
        .region()
        .map(ToString::to_string)
        .ok_or("an AWS region must be configured")?;
    let credentials = aws_config
        .credentials_provider()
        .ok_or("AWS credentials must be configured")?;
    let search = Arc::new(EsSearchIndex::new(es_endpoint, region, credentials));

    // Build application state.
    let config = ApiConfig::new(&web_origin)?;
    let state = AppState::new(store, search, Arc::new(SystemClock), config);

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/admin/events", routes::events::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            headers::security_headers,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
