//! Builders for the two requests the catalog issues.
//!
//! `product_search` assembles the ranked multi-field search: a required
//! boosted match over name/description/category with auto fuzziness, an
//! exact category filter (only when a category is given), an inclusive
//! price range filter, a non-exclusionary rating boost, and highlighting
//! on the name field. `name_suggestions` assembles the bool-prefix
//! autocomplete match over the name n-gram sub-fields.

use crate::config;
use crate::query::types::{
    BoolQuery, Clause, FieldBoost, Fuzziness, Highlight, MatchType, MultiMatch, Range,
    SearchRequest, Term,
};

/// Parameters for a ranked product search. `page` is 1-based.
#[derive(Debug, Clone)]
pub struct ProductSearch {
    pub query: String,
    /// Exact category filter. `None` or an empty string disables it.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: f64,
    /// Inclusive upper price bound.
    pub max_price: f64,
    pub page: u32,
    pub size: u32,
}

/// Builds the ranked product search request.
///
/// The caller is responsible for validating `page >= 1`; the offset here
/// saturates rather than underflows so a malformed page cannot panic.
pub fn product_search(params: &ProductSearch) -> SearchRequest {
    let text_match = Clause::MultiMatch(MultiMatch {
        query: params.query.clone(),
        fields: vec![
            FieldBoost::new("name", config::NAME_BOOST),
            FieldBoost::new("description", config::DESCRIPTION_BOOST),
            FieldBoost::new("category", config::CATEGORY_BOOST),
        ],
        match_type: MatchType::BestFields,
        fuzziness: Some(Fuzziness::Auto),
    });

    let mut filter = Vec::with_capacity(2);
    if let Some(category) = params.category.as_deref() {
        if !category.is_empty() {
            filter.push(Clause::Term(Term {
                field: config::CATEGORY_RAW_FIELD.to_string(),
                value: category.to_string(),
            }));
        }
    }
    filter.push(Clause::Range(Range {
        field: "price".to_string(),
        gte: Some(params.min_price),
        lte: Some(params.max_price),
        ..Range::default()
    }));

    let rating_boost = Clause::Range(Range {
        field: "rating".to_string(),
        gt: Some(config::RATING_BOOST_THRESHOLD),
        ..Range::default()
    });

    SearchRequest {
        query: BoolQuery {
            must: vec![text_match],
            filter,
            should: vec![rating_boost],
        },
        highlight: Some(Highlight {
            fields: vec!["name".to_string()],
            pre_tag: config::HIGHLIGHT_PRE_TAG.to_string(),
            post_tag: config::HIGHLIGHT_POST_TAG.to_string(),
        }),
        from: params.page.saturating_sub(1) * params.size,
        size: params.size,
    }
}

/// Builds the autocomplete request: bool-prefix match over the name
/// n-gram sub-fields, first page of [`config::SUGGESTION_LIMIT`].
pub fn name_suggestions(text: &str) -> SearchRequest {
    let prefix_match = Clause::MultiMatch(MultiMatch {
        query: text.to_string(),
        fields: config::SUGGEST_FIELDS
            .iter()
            .map(|field| FieldBoost::new(field, 1.0))
            .collect(),
        match_type: MatchType::BoolPrefix,
        fuzziness: None,
    });

    SearchRequest {
        query: BoolQuery {
            must: vec![prefix_match],
            ..BoolQuery::default()
        },
        highlight: None,
        from: 0,
        size: config::SUGGESTION_LIMIT,
    }
}
