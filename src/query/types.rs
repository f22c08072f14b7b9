//! Query clause data structures.
//!
//! The vocabulary is the common denominator of document search engines:
//! a boolean combination of full-text match clauses (scored), filter
//! clauses (unscored, mandatory), and should clauses (unscored here,
//! boosting), plus a highlight directive and offset pagination.

use serde::{Deserialize, Serialize};

/// A field name with its multiplicative relevance weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBoost {
    pub field: String,
    pub boost: f32,
}

impl FieldBoost {
    pub fn new(field: &str, boost: f32) -> Self {
        Self {
            field: field.to_string(),
            boost,
        }
    }
}

/// Typo tolerance for full-text matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fuzziness {
    /// Edit-distance budget tuned to term length by the engine
    /// (0 for short terms, up to 2 for long ones).
    Auto,
}

/// How a multi-field match interprets the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Score each field independently, take the best (default full-text mode).
    BestFields,
    /// Every term must match, the final term as a prefix. Used for
    /// search-as-you-type autocomplete.
    BoolPrefix,
}

/// Full-text match over several weighted fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiMatch {
    pub query: String,
    pub fields: Vec<FieldBoost>,
    pub match_type: MatchType,
    pub fuzziness: Option<Fuzziness>,
}

/// Exact term filter on a keyword (analysis-exact) field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub field: String,
    pub value: String,
}

/// Numeric range clause. Unset bounds are unbounded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Range {
    pub field: String,
    /// Inclusive lower bound.
    pub gte: Option<f64>,
    /// Inclusive upper bound.
    pub lte: Option<f64>,
    /// Exclusive lower bound.
    pub gt: Option<f64>,
    /// Exclusive upper bound.
    pub lt: Option<f64>,
}

impl Range {
    /// Returns `true` if `value` satisfies every bound that is set.
    pub fn contains(&self, value: f64) -> bool {
        if let Some(gte) = self.gte {
            if value < gte {
                return false;
            }
        }
        if let Some(lte) = self.lte {
            if value > lte {
                return false;
            }
        }
        if let Some(gt) = self.gt {
            if value <= gt {
                return false;
            }
        }
        if let Some(lt) = self.lt {
            if value >= lt {
                return false;
            }
        }
        true
    }
}

/// A single query clause.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    MultiMatch(MultiMatch),
    Term(Term),
    Range(Range),
}

/// Boolean combination of clauses.
///
/// `must` clauses are required and contribute to the score; `filter`
/// clauses are required and do not score; `should` clauses are optional
/// and only raise the score of documents that satisfy them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(default)]
    pub must: Vec<Clause>,
    #[serde(default)]
    pub filter: Vec<Clause>,
    #[serde(default)]
    pub should: Vec<Clause>,
}

/// Highlighting directive: wrap matched spans of the listed fields in the
/// pre/post marker pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub fields: Vec<String>,
    pub pre_tag: String,
    pub post_tag: String,
}

/// A complete, engine-agnostic search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: BoolQuery,
    #[serde(default)]
    pub highlight: Option<Highlight>,
    /// Zero-based offset of the first hit to return.
    pub from: u32,
    /// Maximum number of hits to return.
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive_bounds() {
        let range = Range {
            field: "price".to_string(),
            gte: Some(100.0),
            lte: Some(500.0),
            ..Range::default()
        };
        assert!(range.contains(100.0), "lower bound is inclusive");
        assert!(range.contains(500.0), "upper bound is inclusive");
        assert!(range.contains(250.0));
        assert!(!range.contains(99.99));
        assert!(!range.contains(500.01));
    }

    #[test]
    fn test_range_exclusive_lower_bound() {
        let range = Range {
            field: "rating".to_string(),
            gt: Some(4.0),
            ..Range::default()
        };
        assert!(!range.contains(4.0), "gt bound is exclusive");
        assert!(range.contains(4.1));
    }

    #[test]
    fn test_range_unbounded() {
        let range = Range {
            field: "price".to_string(),
            ..Range::default()
        };
        assert!(range.contains(f64::MIN));
        assert!(range.contains(f64::MAX));
    }
}
