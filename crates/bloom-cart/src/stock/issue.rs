//! Stock issue records.

use bloom_catalog::ProductId;
use serde::{Deserialize, Serialize};

/// Kind of mismatch between a cart item and server stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Server stock is zero.
    OutOfStock,
    /// Server stock is positive but below the requested quantity.
    InsufficientStock,
}

/// A detected mismatch for one cart item.
///
/// Transient: recomputed from scratch on every reconciliation pass,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockIssue {
    pub product_id: ProductId,
    pub product_name: String,
    pub requested_quantity: i64,
    pub available_stock: i64,
    pub kind: IssueKind,
}

impl StockIssue {
    /// Classify one item's requested quantity against server stock.
    /// Returns `None` when stock covers the request.
    pub fn classify(
        product_id: &ProductId,
        product_name: &str,
        requested_quantity: i64,
        available_stock: i64,
    ) -> Option<Self> {
        let kind = if available_stock <= 0 {
            IssueKind::OutOfStock
        } else if available_stock < requested_quantity {
            IssueKind::InsufficientStock
        } else {
            return None;
        };
        Some(Self {
            product_id: product_id.clone(),
            product_name: product_name.to_string(),
            requested_quantity,
            available_stock: available_stock.max(0),
            kind,
        })
    }
}
