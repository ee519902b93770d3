//! Cart and cart item types.
//!
//! Items are keyed by product id; the shop has no variants. All
//! mutation goes through the operations here; the reconciliation
//! protocol uses the same operations rather than touching items
//! directly.

use crate::error::CartError;
use bloom_catalog::money::Money;
use bloom_catalog::product::{Category, Product};
use bloom_catalog::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// An item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Image URL (denormalized for display).
    pub image_url: Option<String>,
    /// Unit price at add-time.
    pub unit_price: Money,
    /// Discount percentage at add-time.
    pub discount_percent: i64,
    /// Department.
    pub category: Category,
    /// Requested quantity.
    pub quantity: i64,
    /// Stock known when the item was added.
    pub max_stock: i64,
}

impl CartItem {
    /// Effective unit price with the discount applied.
    pub fn discounted_unit_price(&self) -> Money {
        let pct = self.discount_percent.clamp(0, 100);
        Money::new(self.unit_price.amount_cents * (100 - pct) / 100)
    }

    /// Line total (discounted unit price times quantity).
    pub fn line_total(&self) -> Result<Money, CartError> {
        self.discounted_unit_price()
            .try_multiply(self.quantity)
            .ok_or(CartError::Overflow)
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart, one per product.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// Merges quantities when the product is already present. Returns
    /// an error if the quantity is not positive, would exceed
    /// `MAX_QUANTITY_PER_ITEM`, or would overflow.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CartError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CartError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            unit_price: product.price,
            discount_percent: product.discount_percent,
            category: product.category,
            quantity,
            max_stock: product.stock,
        });
        Ok(())
    }

    /// Update an item's quantity. A quantity of zero or less removes
    /// the item. Returns whether an item was found.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CartError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CartError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove an item. Returns whether one was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get an item by product id.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart subtotal with per-item discounts applied.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        let mut total = Money::zero();
        for item in &self.items {
            total = total
                .try_add(&item.line_total()?)
                .ok_or(CartError::Overflow)?;
        }
        Ok(total)
    }
}
