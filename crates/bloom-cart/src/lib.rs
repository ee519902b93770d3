//! Shopping cart and stock reconciliation for Bloomshop.
//!
//! This crate provides:
//!
//! - **Cart**: the single mutable store of cart items, mutated only
//!   through its own operations
//! - **Stock reconciliation**: a background protocol that periodically
//!   checks cart quantities against authoritative server stock and
//!   removes or clamps items that no longer fit
//!
//! # Example
//!
//! ```rust,ignore
//! use bloom_cart::prelude::*;
//!
//! let mut reconciler = Reconciler::new(stock_api, toasts, SyncConfig::default());
//! let outcome = reconciler
//!     .run_pass(&mut cart, SyncTrigger::Mount, ResolveMode::Auto)
//!     .await?;
//! ```

pub mod cart;
pub mod error;
pub mod notify;
pub mod stock;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use error::{CartError, StockError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
    pub use crate::error::{CartError, StockError};
    pub use crate::notify::{Notifier, NullNotifier, Severity};
    pub use crate::stock::{
        IssueKind, PassOutcome, Reconciler, Resolution, ResolveMode, StockIssue, StockLevel,
        StockSource, SyncConfig, SyncScheduler, SyncTrigger,
    };
}
