//! Persistence port for the canonical product records.
//!
//! [`ProductStore`] is the narrow capability set the catalog needs from its
//! system of record: paged retrieval in id order, save with id assignment,
//! and delete by id. Implementations: [`memory::MemoryStore`] for tests and
//! development, [`postgres::PostgresStore`] (behind the `postgres` feature)
//! for a real database.

/// In-memory store adapter.
pub mod memory;
/// Postgres store adapter (sqlx), `postgres` feature.
#[cfg(feature = "postgres")]
pub mod postgres;

use crate::error::StoreError;
use crate::product::{NewProduct, Product};
use async_trait::async_trait;

/// Capability set the catalog needs from the relational store.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns up to `limit` products starting at `offset`, in ascending
    /// id order.
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Product>, StoreError>;

    /// Persists a new product, assigning its id. Returns the stored record.
    async fn save(&self, new: NewProduct) -> Result<Product, StoreError>;

    /// Deletes the product with the given id. Returns `true` if a record
    /// existed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}
