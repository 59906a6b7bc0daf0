//! DynamoDB implementation of the portal `EventStore`.
//!
//! The Event table is keyed by `eventId` and carries a global secondary
//! index on `seoUrl` for the slug uniqueness check.

mod item;

pub mod dynamodb_event_store;

pub use dynamodb_event_store::DynamoDbEventStore;
