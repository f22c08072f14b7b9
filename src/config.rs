//! Tuning constants for catalog search.
//!
//! Every relevance weight, marker string, and cap used when assembling search
//! requests is defined here. These are compile-time constants; backend
//! endpoints (Elasticsearch URL, Postgres DSN) are passed to the adapters at
//! construction time.

/// Relevance boost applied to the `name` field in product search.
pub const NAME_BOOST: f32 = 3.0;

/// Relevance boost applied to the `description` field in product search.
pub const DESCRIPTION_BOOST: f32 = 1.0;

/// Relevance boost applied to the `category` field in product search.
pub const CATEGORY_BOOST: f32 = 2.0;

/// Rating above which a document receives a relevance boost.
///
/// Strictly greater-than. Documents at or below the threshold remain
/// eligible; the clause boosts ranking, it never filters.
pub const RATING_BOOST_THRESHOLD: f64 = 4.0;

/// Opening marker wrapped around matched spans in highlighted fields.
pub const HIGHLIGHT_PRE_TAG: &str = "<b>";

/// Closing marker wrapped around matched spans in highlighted fields.
pub const HIGHLIGHT_POST_TAG: &str = "</b>";

/// Maximum number of autocomplete suggestions returned per query.
pub const SUGGESTION_LIMIT: u32 = 5;

/// Exact-match (keyword) sub-field of `category` used for term filtering.
pub const CATEGORY_RAW_FIELD: &str = "category.raw";

/// Name sub-fields queried for bool-prefix autocomplete.
///
/// The base sub-field matches leading terms; the `_2gram` and `_3gram`
/// shingle sub-fields let confidence grow as more of the query matches
/// consecutive indexed terms.
pub const SUGGEST_FIELDS: [&str; 3] = [
    "name.auto_complete",
    "name.auto_complete._2gram",
    "name.auto_complete._3gram",
];

/// Default name of the search index holding product documents.
pub const DEFAULT_INDEX_NAME: &str = "products";
