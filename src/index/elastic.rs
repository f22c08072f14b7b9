//! Elasticsearch HTTP adapter.
//!
//! Translates [`SearchRequest`](crate::query::SearchRequest) into the
//! Elasticsearch query DSL and talks to the engine over its JSON REST API:
//! `PUT /{index}/_doc/{id}` to save, `DELETE /{index}/_doc/{id}` to remove,
//! `POST /{index}/_search` to query. Responses are decoded into
//! [`SearchHit`]s, including per-field highlight fragments.

use crate::config;
use crate::error::IndexError;
use crate::index::{SearchHit, SearchIndex};
use crate::product::ProductDocument;
use crate::query::{Clause, Highlight, MatchType, Range, SearchRequest};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// [`SearchIndex`] implementation backed by an Elasticsearch endpoint.
#[derive(Debug, Clone)]
pub struct ElasticIndex {
    client: reqwest::Client,
    base_url: String,
    index: String,
    refresh: bool,
}

impl ElasticIndex {
    /// Creates an adapter for the engine at `base_url` (e.g.
    /// `http://localhost:9200`) using the default index name.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            index: config::DEFAULT_INDEX_NAME.to_string(),
            refresh: false,
        }
    }

    /// Uses a custom index name.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Requests an index refresh on every write so documents are visible
    /// to search immediately. Meant for tests; costly in production.
    pub fn with_refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    fn doc_url(&self, id: &str) -> String {
        let refresh = if self.refresh { "?refresh=true" } else { "" };
        format!("{}/{}/_doc/{}{}", self.base_url, self.index, id, refresh)
    }

    fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url, self.index)
    }
}

#[async_trait]
impl SearchIndex for ElasticIndex {
    async fn save(&self, document: &ProductDocument) -> Result<(), IndexError> {
        let response = self
            .client
            .put(self.doc_url(&document.id))
            .json(document)
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), IndexError> {
        let response = self.client.delete(self.doc_url(id)).send().await?;
        // A missing document is already the requested state.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        check_status(response).await.map(|_| ())
    }

    async fn execute(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, IndexError> {
        let body = request_body(request);
        tracing::debug!(index = %self.index, body = %body, "executing search");

        let response = self
            .client
            .post(self.search_url())
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let decoded: EsResponse = response
            .json()
            .await
            .map_err(|e| IndexError::Malformed(e.to_string()))?;

        Ok(decoded
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchHit {
                document: hit.source,
                score: hit.score.unwrap_or_default(),
                highlights: hit.highlight,
            })
            .collect())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, IndexError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(IndexError::Engine {
        status: status.as_u16(),
        body,
    })
}

/// Renders the engine-agnostic request into the Elasticsearch `_search`
/// body: a `bool` query with must/filter/should arrays, an optional
/// `highlight` section, and `from`/`size` pagination.
pub fn request_body(request: &SearchRequest) -> Value {
    let mut bool_query = Map::new();
    for (key, clauses) in [
        ("must", &request.query.must),
        ("filter", &request.query.filter),
        ("should", &request.query.should),
    ] {
        if !clauses.is_empty() {
            bool_query.insert(
                key.to_string(),
                Value::Array(clauses.iter().map(clause_body).collect()),
            );
        }
    }

    let mut body = json!({
        "from": request.from,
        "size": request.size,
        "query": { "bool": bool_query },
    });
    if let Some(highlight) = &request.highlight {
        body["highlight"] = highlight_body(highlight);
    }
    body
}

fn clause_body(clause: &Clause) -> Value {
    match clause {
        Clause::MultiMatch(m) => {
            let fields: Vec<String> = m
                .fields
                .iter()
                .map(|f| {
                    if f.boost == 1.0 {
                        f.field.clone()
                    } else {
                        format!("{}^{}", f.field, f.boost)
                    }
                })
                .collect();
            let mut multi_match = Map::new();
            multi_match.insert("query".to_string(), json!(m.query));
            multi_match.insert("fields".to_string(), json!(fields));
            if m.match_type == MatchType::BoolPrefix {
                multi_match.insert("type".to_string(), json!("bool_prefix"));
            }
            if m.fuzziness.is_some() {
                multi_match.insert("fuzziness".to_string(), json!("AUTO"));
            }
            json!({ "multi_match": multi_match })
        }
        Clause::Term(term) => {
            let mut body = Map::new();
            body.insert(term.field.clone(), json!({ "value": term.value }));
            json!({ "term": body })
        }
        Clause::Range(range) => {
            let mut body = Map::new();
            body.insert(range.field.clone(), range_bounds(range));
            json!({ "range": body })
        }
    }
}

fn range_bounds(range: &Range) -> Value {
    let mut bounds = Map::new();
    for (key, bound) in [
        ("gte", range.gte),
        ("lte", range.lte),
        ("gt", range.gt),
        ("lt", range.lt),
    ] {
        if let Some(value) = bound {
            bounds.insert(key.to_string(), json!(value));
        }
    }
    Value::Object(bounds)
}

fn highlight_body(highlight: &Highlight) -> Value {
    let fields: Map<String, Value> = highlight
        .fields
        .iter()
        .map(|field| (field.clone(), json!({})))
        .collect();
    json!({
        "pre_tags": [highlight.pre_tag],
        "post_tags": [highlight.post_tag],
        "fields": fields,
    })
}

#[derive(Debug, Deserialize)]
struct EsResponse {
    hits: EsHits,
}

#[derive(Debug, Deserialize)]
struct EsHits {
    hits: Vec<EsHit>,
}

#[derive(Debug, Deserialize)]
struct EsHit {
    #[serde(rename = "_score")]
    score: Option<f32>,
    #[serde(rename = "_source")]
    source: ProductDocument,
    #[serde(default)]
    highlight: HashMap<String, Vec<String>>,
}
