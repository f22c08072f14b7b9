//! Core catalog types.
//!
//! A [`Product`] is the canonical record owned by the relational store; its
//! numeric id is assigned on insertion. A [`ProductDocument`] is the
//! denormalized copy held by the search index under the string form of the
//! same id. The two are created and deleted together but there is no
//! mechanism to detect or repair divergence if one of the writes fails.

use serde::{Deserialize, Serialize};

/// Caller-supplied fields for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    /// Unit price. Non-negative by convention.
    pub price: f64,
    /// Average rating, typically 0.0–5.0.
    pub rating: f64,
    pub category: String,
}

/// The canonical product record, system of record for the catalog.
///
/// Mutated only by full replacement; this slice of the system defines no
/// partial update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub category: String,
}

impl Product {
    /// Assembles the canonical record from a store-assigned id and the
    /// creation input.
    pub fn from_new(id: i64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            rating: new.rating,
            category: new.category,
        }
    }
}

/// The denormalized search document mirroring a [`Product`].
///
/// Identified by the decimal string form of the product id. Field values
/// are the indexed copies; after a search, `name` may carry embedded
/// highlight markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub category: String,
}

impl From<&Product> for ProductDocument {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            rating: product.rating,
            category: product.category.clone(),
        }
    }
}
