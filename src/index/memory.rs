//! In-memory search index.
//!
//! Interprets the [`SearchRequest`](crate::query::SearchRequest) model
//! directly over a document map: boosted multi-field matching with auto
//! fuzziness, exact term and numeric range filters, should-clause boosts,
//! bool-prefix matching for autocomplete, highlighting, and offset
//! pagination. Scoring is a simple boosted term-overlap count, enough to
//! honor the ordering contracts of the request model without reimplementing
//! a ranking function.
//!
//! This is the test double for [`SearchIndex`] and a dependency-free dev
//! backend; it is not a production search engine.

use crate::error::IndexError;
use crate::index::text::{fuzzy_eq, tokenize};
use crate::index::{SearchHit, SearchIndex};
use crate::product::ProductDocument;
use crate::query::{BoolQuery, Clause, MatchType, MultiMatch, SearchRequest};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

/// Thread-safe in-memory implementation of [`SearchIndex`].
///
/// Documents live in a `BTreeMap` keyed by id so that iteration order, and
/// therefore tie-breaking between equally scored hits, is deterministic.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    documents: RwLock<BTreeMap<String, ProductDocument>>,
}

impl MemoryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.read().len()
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn save(&self, document: &ProductDocument) -> Result<(), IndexError> {
        self.documents
            .write()
            .insert(document.id.clone(), document.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), IndexError> {
        self.documents.write().remove(id);
        Ok(())
    }

    async fn execute(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, IndexError> {
        let documents = self.documents.read();
        let mut scored: Vec<(f32, &ProductDocument)> = Vec::new();

        for document in documents.values() {
            if let Some(score) = evaluate(&request.query, document) {
                scored.push((score, document));
            }
        }

        // Descending score, ascending id between equals.
        scored.sort_unstable_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        let hits = scored
            .into_iter()
            .skip(request.from as usize)
            .take(request.size as usize)
            .map(|(score, document)| SearchHit {
                document: document.clone(),
                score,
                highlights: build_highlights(request, document),
            })
            .collect();

        Ok(hits)
    }
}

/// Evaluates the boolean query against one document.
///
/// Returns `None` when any must or filter clause fails, otherwise the
/// combined score of must matches plus satisfied should clauses.
fn evaluate(query: &BoolQuery, document: &ProductDocument) -> Option<f32> {
    for clause in &query.filter {
        if !passes(clause, document) {
            return None;
        }
    }

    let mut score = 0.0f32;
    for clause in &query.must {
        match clause {
            Clause::MultiMatch(m) => score += score_multi_match(m, document)?,
            other => {
                if !passes(other, document) {
                    return None;
                }
            }
        }
    }

    for clause in &query.should {
        if passes(clause, document) {
            score += 1.0;
        }
    }

    Some(score)
}

/// Pass/fail evaluation of a non-scoring clause.
fn passes(clause: &Clause, document: &ProductDocument) -> bool {
    match clause {
        Clause::Term(term) => {
            // Keyword sub-fields are analysis-exact: no lowercasing.
            text_field(document, &term.field) == Some(term.value.as_str())
        }
        Clause::Range(range) => {
            numeric_field(document, &range.field).is_some_and(|value| range.contains(value))
        }
        Clause::MultiMatch(m) => score_multi_match(m, document).is_some(),
    }
}

/// Best-fields scoring: for each weighted field, boost × number of query
/// terms present in it; the document scores its best field. `None` when
/// the clause matches nowhere.
fn score_multi_match(clause: &MultiMatch, document: &ProductDocument) -> Option<f32> {
    let terms = tokenize(&clause.query);
    if terms.is_empty() {
        return None;
    }

    let mut best: Option<f32> = None;
    for field in &clause.fields {
        let Some(text) = text_field(document, &field.field) else {
            continue;
        };
        let tokens = tokenize(text);
        let matched = match clause.match_type {
            MatchType::BestFields => terms
                .iter()
                .filter(|term| {
                    tokens
                        .iter()
                        .any(|token| term_matches(clause, term.as_str(), token))
                })
                .count(),
            MatchType::BoolPrefix => {
                if bool_prefix_matches(&terms, &tokens) {
                    terms.len()
                } else {
                    0
                }
            }
        };
        if matched > 0 {
            let field_score = field.boost * matched as f32;
            best = Some(best.map_or(field_score, |b: f32| b.max(field_score)));
        }
    }
    best
}

/// Bool-prefix semantics: every term must appear in the field, the final
/// term matching as a prefix of some token.
fn bool_prefix_matches(terms: &[String], tokens: &[String]) -> bool {
    let Some((last, leading)) = terms.split_last() else {
        return false;
    };
    leading
        .iter()
        .all(|term| tokens.iter().any(|token| token == term))
        && tokens.iter().any(|token| token.starts_with(last.as_str()))
}

/// Whether a single query term matches a document token under the clause's
/// matching mode.
fn term_matches(clause: &MultiMatch, term: &str, token: &str) -> bool {
    match clause.match_type {
        MatchType::BoolPrefix => token.starts_with(term),
        MatchType::BestFields => {
            if clause.fuzziness.is_some() {
                fuzzy_eq(term, token)
            } else {
                term == token
            }
        }
    }
}

/// Builds per-field highlight fragments for the requested fields, wrapping
/// every matched term occurrence in the configured marker pair.
fn build_highlights(
    request: &SearchRequest,
    document: &ProductDocument,
) -> HashMap<String, Vec<String>> {
    let mut highlights = HashMap::new();
    let Some(directive) = &request.highlight else {
        return highlights;
    };

    // Terms and matching mode come from the scoring clauses.
    let matchers: Vec<&MultiMatch> = request
        .query
        .must
        .iter()
        .filter_map(|clause| match clause {
            Clause::MultiMatch(m) => Some(m),
            _ => None,
        })
        .collect();

    for field in &directive.fields {
        let Some(text) = text_field(document, field) else {
            continue;
        };
        if let Some(fragment) =
            highlight_text(text, &matchers, &directive.pre_tag, &directive.post_tag)
        {
            highlights.insert(field.clone(), vec![fragment]);
        }
    }
    highlights
}

/// Wraps every token of `text` that matches a query term. Returns `None`
/// when nothing matched, so absent fields mirror engine behavior.
fn highlight_text(text: &str, matchers: &[&MultiMatch], pre: &str, post: &str) -> Option<String> {
    let mut fragment = String::with_capacity(text.len());
    let mut matched_any = false;

    let mut rest = text;
    while !rest.is_empty() {
        let token_len = rest
            .chars()
            .take_while(|c| c.is_alphanumeric())
            .map(char::len_utf8)
            .sum::<usize>();
        if token_len > 0 {
            let (token, tail) = rest.split_at(token_len);
            let lowered = token.to_lowercase();
            let is_match = matchers.iter().any(|clause| {
                tokenize(&clause.query)
                    .iter()
                    .any(|term| term_matches(clause, term, &lowered))
            });
            if is_match {
                matched_any = true;
                fragment.push_str(pre);
                fragment.push_str(token);
                fragment.push_str(post);
            } else {
                fragment.push_str(token);
            }
            rest = tail;
        } else {
            let sep_len = rest
                .chars()
                .take_while(|c| !c.is_alphanumeric())
                .map(char::len_utf8)
                .sum::<usize>();
            let (sep, tail) = rest.split_at(sep_len);
            fragment.push_str(sep);
            rest = tail;
        }
    }

    matched_any.then_some(fragment)
}

/// Resolves a text field path, mapping analysis sub-fields (`category.raw`,
/// `name.auto_complete`, ...) onto their base field.
fn text_field<'a>(document: &'a ProductDocument, field: &str) -> Option<&'a str> {
    match field.split('.').next().unwrap_or(field) {
        "name" => Some(&document.name),
        "description" => Some(&document.description),
        "category" => Some(&document.category),
        "id" => Some(&document.id),
        _ => None,
    }
}

/// Resolves a numeric field path.
fn numeric_field(document: &ProductDocument, field: &str) -> Option<f64> {
    match field {
        "price" => Some(document.price),
        "rating" => Some(document.rating),
        _ => None,
    }
}
