//! Cart error types.

use thiserror::Error;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,
}

/// Errors from the stock-check collaborator.
#[derive(Error, Debug)]
pub enum StockError {
    /// Network failure reaching the stock endpoint.
    #[error("Stock check failed: {0}")]
    Network(String),

    /// Response did not decode.
    #[error("Malformed stock response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for StockError {
    fn from(e: serde_json::Error) -> Self {
        StockError::MalformedResponse(e.to_string())
    }
}
