//! Batched stock-check collaborator.

use crate::error::StockError;
use async_trait::async_trait;
use bloom_catalog::ProductId;
use serde::{Deserialize, Serialize};

/// Current stock for one product, as reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockLevel {
    /// Product this level belongs to.
    pub product_id: ProductId,
    /// Product name, for matching back to cart items in messages.
    pub name: String,
    /// Units currently in stock.
    pub stock: i64,
}

/// Source of authoritative stock levels.
///
/// One call covers a whole reconciliation pass: implementations are
/// expected to batch all requested ids into a single request so the
/// pass sees one consistent snapshot.
#[async_trait]
pub trait StockSource: Send + Sync {
    async fn check_stock(&self, product_ids: &[ProductId]) -> Result<Vec<StockLevel>, StockError>;
}
