//! Elasticsearch implementation of the portal `SearchIndex`.
//!
//! The index is a denormalized, eventually-consistent projection of the
//! Event table; something external keeps it in sync. This crate only reads
//! from it, one signed HTTP search request per List invocation.

pub mod es_search_index;
pub mod query;

pub use es_search_index::EsSearchIndex;
