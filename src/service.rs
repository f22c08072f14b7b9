//! Catalog service.
//!
//! Orchestrates the two backends: every create writes the canonical record
//! to the store and then mirrors it into the search index; every delete
//! removes both copies, in the same order. Search and autocomplete are
//! delegated to the index through the query builders; listing goes straight
//! to the store.
//!
//! The two writes are not transactional. When the second write fails the
//! first is left in place and the error names the divergent product id:
//! see [`CatalogError::IndexWrite`] and [`CatalogError::IndexDelete`].

use crate::error::CatalogError;
use crate::index::SearchIndex;
use crate::product::{NewProduct, Product, ProductDocument};
use crate::query::{name_suggestions, product_search};
use crate::store::ProductStore;

pub use crate::query::ProductSearch;

/// The catalog service, generic over its store and index backends.
///
/// Constructed explicitly with the two capabilities at process startup;
/// tests hand it the in-memory adapters.
pub struct CatalogService<S, I> {
    store: S,
    index: I,
}

impl<S: ProductStore, I: SearchIndex> CatalogService<S, I> {
    pub fn new(store: S, index: I) -> Self {
        Self { store, index }
    }

    /// Returns one page of canonical records in store (id) order.
    ///
    /// `page` is 1-based; `page < 1` or `size < 1` is rejected with
    /// [`CatalogError::InvalidPage`]. The total count is not exposed.
    pub async fn list_products(&self, page: u32, size: u32) -> Result<Vec<Product>, CatalogError> {
        let offset = page_offset(page, size)?;
        let products = self.store.find_page(offset, u64::from(size)).await?;
        Ok(products)
    }

    /// Creates a product: persists the canonical record (store assigns the
    /// id), then mirrors it into the search index under the string form of
    /// that id. Returns the canonical record.
    ///
    /// The index write happening second means a failure here leaves the
    /// canonical record in place with no search document; the error carries
    /// the orphaned id and no rollback is attempted.
    pub async fn create_product(&self, input: NewProduct) -> Result<Product, CatalogError> {
        let product = self.store.save(input).await?;
        tracing::info!(id = product.id, name = %product.name, "product created");

        let document = ProductDocument::from(&product);
        if let Err(source) = self.index.save(&document).await {
            tracing::error!(
                id = product.id,
                error = %source,
                "index write failed after store write; catalog and index have diverged"
            );
            return Err(CatalogError::IndexWrite {
                id: product.id,
                source,
            });
        }

        Ok(product)
    }

    /// Deletes a product from the store and then from the index.
    ///
    /// Deleting an id that does not exist is a no-op success. An index
    /// failure after a successful store delete surfaces as
    /// [`CatalogError::IndexDelete`] with no compensation.
    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogError> {
        let existed = self.store.delete_by_id(id).await?;
        if !existed {
            tracing::debug!(id, "delete of absent product");
        }

        if let Err(source) = self.index.delete(&id.to_string()).await {
            tracing::error!(
                id,
                error = %source,
                "index delete failed after store delete; catalog and index have diverged"
            );
            return Err(CatalogError::IndexDelete { id, source });
        }

        tracing::info!(id, existed, "product deleted");
        Ok(())
    }

    /// Returns up to 5 product names whose indexed name prefix-matches the
    /// query, in engine relevance order.
    pub async fn suggest(&self, query: &str) -> Result<Vec<String>, CatalogError> {
        let request = name_suggestions(query);
        let hits = self.index.execute(&request).await?;
        Ok(hits.into_iter().map(|hit| hit.document.name).collect())
    }

    /// Ranked product search.
    ///
    /// Builds the weighted multi-field request (see
    /// [`product_search`](crate::query::product_search)), executes it, and
    /// shapes each hit by substituting the highlighted name fragment when
    /// one was produced. Zero hits is an empty vec. `params.page` follows
    /// the same 1-based convention as [`Self::list_products`].
    pub async fn search(
        &self,
        params: &ProductSearch,
    ) -> Result<Vec<ProductDocument>, CatalogError> {
        page_offset(params.page, params.size)?;

        let request = product_search(params);
        let hits = self.index.execute(&request).await?;
        tracing::debug!(query = %params.query, hits = hits.len(), "search executed");

        Ok(hits
            .into_iter()
            .map(|hit| hit.into_highlighted_document())
            .collect())
    }
}

/// Converts a 1-based page to a store offset, rejecting invalid input.
fn page_offset(page: u32, size: u32) -> Result<u64, CatalogError> {
    if page < 1 || size < 1 {
        return Err(CatalogError::InvalidPage { page, size });
    }
    Ok(u64::from(page - 1) * u64::from(size))
}
