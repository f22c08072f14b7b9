//! Plain-data search request model and catalog query builders.
//!
//! A [`SearchRequest`] describes query intent (match clauses, filters,
//! boosting clauses, highlighting, pagination) without committing to any
//! engine's API. Adapters in [`crate::index`] translate it into their own
//! wire format. The builders in [`builder`] assemble the two requests the
//! catalog issues: ranked product search and name autocomplete.

pub mod builder;
mod types;

pub use builder::{name_suggestions, product_search, ProductSearch};
pub use types::{
    BoolQuery, Clause, FieldBoost, Fuzziness, Highlight, MatchType, MultiMatch, Range,
    SearchRequest, Term,
};
