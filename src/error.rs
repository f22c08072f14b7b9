//! Error types for the catalog layers.
//!
//! Each layer has its own error enum: [`StoreError`] for the relational
//! store, [`IndexError`] for the search index, and [`CatalogError`] for the
//! service. The service distinguishes a plain index failure from one that
//! left the two backends divergent ([`CatalogError::IndexWrite`] /
//! [`CatalogError::IndexDelete`]): those variants carry the id of the
//! product whose canonical and indexed copies no longer agree.

use thiserror::Error;

/// Failure in the relational product store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database rejected or failed the operation.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend-agnostic store failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Failure in the search index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The engine could not be reached or the request failed in transit.
    #[error("search engine request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine answered with a non-success status.
    #[error("search engine returned status {status}: {body}")]
    Engine { status: u16, body: String },

    /// The engine's response could not be decoded into the expected shape.
    #[error("malformed search response: {0}")]
    Malformed(String),
}

/// Service-level error returned by [`CatalogService`](crate::CatalogService).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Pagination input was rejected: pages are 1-based and sizes positive.
    #[error("invalid page request: page={page}, size={size} (page and size must be >= 1)")]
    InvalidPage { page: u32, size: u32 },

    /// The relational store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The search index failed while executing a query.
    #[error(transparent)]
    Query(#[from] IndexError),

    /// The product was written to the store but the index write failed.
    ///
    /// The canonical record with this id persists while its search document
    /// does not; no rollback or compensation is performed.
    #[error("product {id} is stored but not indexed: {source}")]
    IndexWrite {
        id: i64,
        #[source]
        source: IndexError,
    },

    /// The product was deleted from the store but the index delete failed.
    ///
    /// The search document with this id outlives its canonical record; no
    /// compensation is performed.
    #[error("product {id} deleted from store but not from index: {source}")]
    IndexDelete {
        id: i64,
        #[source]
        source: IndexError,
    },
}
