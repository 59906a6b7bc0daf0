//! Portal admin API — HTTP surface for the Event CRUD endpoints.
//!
//! Handlers are stateless: every invocation validates its input, talks to
//! the injected store/index adapters, and formats a response. The only
//! shared state is the adapter handles in [`state::AppState`].

pub mod error;
pub mod headers;
pub mod identity;
pub mod routes;
pub mod state;
