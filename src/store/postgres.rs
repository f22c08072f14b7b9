//! Postgres product store.
//!
//! Thin sqlx adapter over a `products` table:
//!
//! ```sql
//! CREATE TABLE products (
//!     id          BIGSERIAL PRIMARY KEY,
//!     name        TEXT             NOT NULL,
//!     description TEXT             NOT NULL,
//!     price       DOUBLE PRECISION NOT NULL,
//!     rating      DOUBLE PRECISION NOT NULL,
//!     category    TEXT             NOT NULL
//! );
//! ```
//!
//! Schema management lives with the deployment, not this crate.

use crate::error::StoreError;
use crate::product::{NewProduct, Product};
use crate::store::ProductStore;
use async_trait::async_trait;
use sqlx::PgPool;

/// [`ProductStore`] implementation backed by a Postgres pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wraps an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PostgresStore {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, rating, category \
             FROM products ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn save(&self, new: NewProduct) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, rating, category) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, description, price, rating, category",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.rating)
        .bind(&new.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
