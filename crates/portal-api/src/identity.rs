//! Caller identity extraction.
//!
//! Authentication happens at the gateway; by the time a request reaches a
//! handler the verified email claim has been forwarded as a plain header.
//! The claim may legitimately be absent, so extraction never rejects.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the gateway-verified email claim.
pub const CALLER_EMAIL_HEADER: &str = "x-caller-email";

/// The caller's identity claim, if the gateway forwarded one.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub Option<String>);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(CALLER_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        Ok(Self(email))
    }
}
