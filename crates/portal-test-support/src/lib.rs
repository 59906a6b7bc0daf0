//! Shared test doubles for the portal admin API.

mod clock;
mod search;
mod store;

pub use clock::FixedClock;
pub use search::{FailingSearchIndex, StubSearchIndex};
pub use store::{FailingEventStore, InMemoryEventStore};
