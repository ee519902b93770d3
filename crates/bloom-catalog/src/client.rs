//! Product listing collaborator.
//!
//! The engine re-filters and re-sorts client-side, so the listing
//! response's ordering and totals are used only incidentally.

use crate::error::CatalogError;
use crate::product::{Category, Product};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A page of products from the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductListing {
    /// The product records.
    pub products: Vec<Product>,
    /// Server-side total, informational only.
    pub total: i64,
}

/// Source of product listings.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch products, optionally restricted to one category.
    async fn fetch_products(
        &self,
        category: Option<Category>,
    ) -> Result<ProductListing, CatalogError>;
}
