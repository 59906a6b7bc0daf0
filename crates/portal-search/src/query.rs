//! Search request body construction.

use serde_json::{Value, json};

use portal_core::search::EventSearchQuery;

/// Text-analyzed fields. These are indexed twice — tokenized for search and
/// verbatim under a `.keyword` sub-field — and sorting must target the
/// verbatim form.
pub const SORT_KEYWORD_FIELDS: &[&str] = &[
    "title",
    "shortDescription",
    "longDescription",
    "status",
    "venue",
];

/// Fields projected into each hit. A strict subset of the Event schema that
/// omits long-form content and deletion metadata.
pub const SOURCE_FIELDS: &[&str] = &[
    "eventId",
    "title",
    "shortDescription",
    "seoUrl",
    "displayAdmission",
    "eventDate",
    "displayDate",
    "displayVenue",
    "venue",
    "region",
    "media",
    "category",
    "topic",
    "status",
];

/// Resolves the field a sort actually targets, rewriting text-analyzed
/// fields to their exact-match variant. Fields outside the set pass through
/// untouched.
#[must_use]
pub fn sort_target(field: &str) -> String {
    if SORT_KEYWORD_FIELDS.contains(&field) {
        format!("{field}.keyword")
    } else {
        field.to_owned()
    }
}

/// Builds the full search body: non-deleted events only, single-field sort,
/// numeric offset paging, fixed projection.
#[must_use]
pub fn search_body(query: &EventSearchQuery) -> Value {
    json!({
        "query": {
            "bool": {
                "must": [],
                "filter": { "term": { "isDeleted": false } }
            }
        },
        "size": query.limit,
        "sort": { sort_target(&query.sort.field): { "order": query.sort.direction } },
        "from": query.offset,
        "_source": SOURCE_FIELDS,
    })
}
