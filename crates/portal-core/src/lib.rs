//! Portal Core — shared domain abstractions.
//!
//! This crate defines the Event record model, the error taxonomy, and the
//! trait seams the HTTP handlers depend on. It contains no infrastructure
//! code; the DynamoDB and search-index adapters live in their own crates.

pub mod clock;
pub mod error;
pub mod event;
pub mod search;
pub mod store;
