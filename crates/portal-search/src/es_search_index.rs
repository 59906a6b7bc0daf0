//! Signed HTTP client for the Elasticsearch domain.

use std::time::SystemTime;

use async_trait::async_trait;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use serde::Deserialize;

use portal_core::error::PortalError;
use portal_core::event::EventSummary;
use portal_core::search::{EventSearchQuery, SearchIndex, SearchPage};

use crate::query;

/// Search index adapter talking to an Elasticsearch-compatible domain over
/// HTTPS, signing every request with the ambient AWS credentials.
#[derive(Debug, Clone)]
pub struct EsSearchIndex {
    http: reqwest::Client,
    endpoint: String,
    region: String,
    credentials: SharedCredentialsProvider,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EsSearchResponse {
    hits: EsHits,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EsHits {
    hits: Vec<EsHit>,
    total: EsTotal,
}

#[derive(Debug, Deserialize)]
struct EsHit {
    #[serde(rename = "_source")]
    source: EventSummary,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EsTotal {
    value: u64,
}

fn infrastructure(context: &str, detail: impl std::fmt::Display) -> PortalError {
    PortalError::Infrastructure(format!("{context}: {detail}"))
}

impl EsSearchIndex {
    /// Creates an adapter for the given domain endpoint host.
    #[must_use]
    pub fn new(endpoint: String, region: String, credentials: SharedCredentialsProvider) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            region,
            credentials,
        }
    }

    /// Produces the SigV4 headers for a request against the `es` service.
    async fn signed_headers(
        &self,
        url: &str,
        body: &[u8],
    ) -> Result<http::HeaderMap, PortalError> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(|e| infrastructure("failed to resolve credentials", e))?;
        let identity = credentials.into();

        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name("es")
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| infrastructure("failed to build signing parameters", e))?
            .into();

        let signable = SignableRequest::new(
            "GET",
            url,
            std::iter::once(("content-type", "application/json")),
            SignableBody::Bytes(body),
        )
        .map_err(|e| infrastructure("unsignable search request", e))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| infrastructure("request signing failed", e))?
            .into_parts();

        let mut request = http::Request::builder()
            .method("GET")
            .uri(url)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(())
            .map_err(|e| infrastructure("invalid search request", e))?;
        instructions.apply_to_request_http1x(&mut request);

        Ok(request.headers().clone())
    }
}

#[async_trait]
impl SearchIndex for EsSearchIndex {
    async fn search_events(&self, query: &EventSearchQuery) -> Result<SearchPage, PortalError> {
        let url = format!("https://{}/event/_doc/_search", self.endpoint);
        let body = serde_json::to_vec(&query::search_body(query))
            .map_err(|e| infrastructure("failed to encode search body", e))?;
        let headers = self.signed_headers(&url, &body).await?;

        tracing::debug!(limit = query.limit, offset = query.offset, "searching events");

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| infrastructure("search request failed", e))?;

        let parsed: EsSearchResponse = response
            .json()
            .await
            .map_err(|e| infrastructure("malformed search response", e))?;

        Ok(SearchPage {
            items: parsed.hits.hits.into_iter().map(|hit| hit.source).collect(),
            total: parsed.hits.total.value,
        })
    }
}
