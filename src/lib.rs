//! # product-catalog
//!
//! A product catalog service backed by a relational store and mirrored into
//! a full-text search index for ranked search and name autocomplete.
//!
//! ## Features
//!
//! - **Catalog CRUD** over a paged relational store (canonical `Product` records)
//! - **Search mirroring**: every created product is written to the search index
//!   as a denormalized `ProductDocument`; deletes remove both copies
//! - **Ranked search** with per-field boosts (name^3, description^1, category^2),
//!   typo-tolerant matching, exact category and price-range filters, a
//!   non-exclusionary rating boost, and `<b>`-tagged name highlighting
//! - **Autocomplete** via bool-prefix matching over name n-gram sub-fields,
//!   capped at 5 suggestions
//! - **Pluggable backends**: Elasticsearch over HTTP, Postgres via sqlx
//!   (`postgres` feature), and in-memory adapters for tests and development
//!
//! ## Architecture
//!
//! ```text
//! CatalogService → { ProductStore, SearchIndex }
//!                    store::postgres | store::memory
//!                    index::elastic  | index::memory
//! Query intent: query::SearchRequest (bool / multi_match / term / range /
//! highlight / from+size); adapters translate it into their own wire format.
//! ```
//!
//! The two writes on create (store, then index) are deliberately
//! non-transactional; a failing index write surfaces the divergent product id
//! in [`error::CatalogError::IndexWrite`] rather than rolling back the store.

/// Tuning constants: field boosts, highlight tags, suggestion cap, defaults.
pub mod config;
/// Typed errors for the store, index, and service layers.
pub mod error;
/// Search index port: capability trait, hit shapes, and the Elasticsearch and
/// in-memory adapters.
pub mod index;
/// Core catalog types: `Product`, `NewProduct`, and the derived `ProductDocument`.
pub mod product;
/// Plain-data search request model and the catalog query builders.
pub mod query;
/// Catalog service: orchestrates the store and the index.
pub mod service;
/// Persistence port: capability trait plus in-memory and Postgres adapters.
pub mod store;

pub use error::{CatalogError, IndexError, StoreError};
pub use product::{NewProduct, Product, ProductDocument};
pub use service::{CatalogService, ProductSearch};
