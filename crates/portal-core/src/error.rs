//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// The first three variants carry a message that is safe to return to the
/// caller. `Infrastructure` detail is for diagnostics only and must never
/// cross the trust boundary.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Client input is invalid — missing required field, invalid enum value,
    /// or a slug uniqueness violation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A referenced resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform the operation.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A store/index/transport failure or programming error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
