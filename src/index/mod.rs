//! Search index port.
//!
//! [`SearchIndex`] abstracts the search engine: save and delete of product
//! documents, plus execution of a [`SearchRequest`](crate::query::SearchRequest)
//! returning ranked [`SearchHit`]s with optional per-field highlight
//! fragments. Implementations: [`elastic::ElasticIndex`] over HTTP and
//! [`memory::MemoryIndex`] for tests and development.

/// Elasticsearch HTTP adapter.
pub mod elastic;
/// In-memory engine interpreting the request model directly.
pub mod memory;
mod text;

use crate::error::IndexError;
use crate::product::ProductDocument;
use crate::query::SearchRequest;
use async_trait::async_trait;
use std::collections::HashMap;

/// A ranked hit returned by a search.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The indexed document as stored.
    pub document: ProductDocument,
    /// Engine relevance score, descending across a result page.
    pub score: f32,
    /// Highlighted fragments keyed by field name, present only for fields
    /// the request asked to highlight and in which a term matched.
    pub highlights: HashMap<String, Vec<String>>,
}

impl SearchHit {
    /// Shapes the hit for callers: substitutes the highlighted `name`
    /// fragment (markers embedded) into the document when one was
    /// produced. Other fields keep their indexed values.
    pub fn into_highlighted_document(self) -> ProductDocument {
        let mut document = self.document;
        if let Some(fragment) = self
            .highlights
            .get("name")
            .and_then(|fragments| fragments.first())
        {
            document.name = fragment.clone();
        }
        document
    }
}

/// Capability set the catalog needs from a search engine.
///
/// Deleting a document that does not exist is a success: the index
/// converges to the requested state either way.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Inserts or replaces the document under its id.
    async fn save(&self, document: &ProductDocument) -> Result<(), IndexError>;

    /// Removes the document with the given id, if present.
    async fn delete(&self, id: &str) -> Result<(), IndexError>;

    /// Executes a structured query, returning hits in descending
    /// relevance order. Zero hits is an empty vec, not an error.
    async fn execute(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, IndexError>;
}
