//! In-memory product store.
//!
//! A `BTreeMap` keyed by id gives the ascending-id iteration order the
//! paging contract requires; ids are assigned from a monotonic counter the
//! way a database sequence would.

use crate::error::StoreError;
use crate::product::{NewProduct, Product};
use crate::store::ProductStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

struct StoreData {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

/// Thread-safe in-memory implementation of [`ProductStore`].
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    /// Creates an empty store; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(StoreData {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the number of stored products.
    pub fn product_count(&self) -> usize {
        self.data.read().products.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Product>, StoreError> {
        let data = self.data.read();
        Ok(data
            .products
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn save(&self, new: NewProduct) -> Result<Product, StoreError> {
        let mut data = self.data.write();
        let id = data.next_id;
        data.next_id += 1;
        let product = Product::from_new(id, new);
        data.products.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.data.write().products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            rating: 4.0,
            category: "Misc".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.save(new_product("a")).await.unwrap();
        let b = store.save(new_product("b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_find_page_windows_in_id_order() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.save(new_product(&format!("p{i}"))).await.unwrap();
        }
        let page = store.find_page(2, 2).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let past_end = store.find_page(10, 2).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let store = MemoryStore::new();
        let product = store.save(new_product("a")).await.unwrap();
        assert!(store.delete_by_id(product.id).await.unwrap());
        assert!(!store.delete_by_id(product.id).await.unwrap());
        assert_eq!(store.product_count(), 0);
    }
}
