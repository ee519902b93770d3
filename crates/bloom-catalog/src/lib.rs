//! Product catalog domain and the filter engine for Bloomshop.
//!
//! This crate provides the shop's product types and the pure
//! filter/sort/paginate pipeline behind every listing page:
//!
//! - **Products**: books, stationery, and flowers with their
//!   category-specific detail records
//! - **Filter engine**: one generic engine parameterized by a
//!   per-category capability profile
//! - **Catalog state**: an explicit, injectable container replacing
//!   singleton page stores
//!
//! # Example
//!
//! ```rust,ignore
//! use bloom_catalog::prelude::*;
//!
//! let engine = FilterEngine::new(CategoryProfile::flowers());
//! let filters = FilterState::new()
//!     .with_stock(StockFilter::InStock)
//!     .with_sort(SortKey::PriceDesc);
//!
//! let ordered = engine.compute(&products, &filters);
//! let (page, pagination) = engine.paginate(&ordered, 1, 12);
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod ids;
pub mod money;
pub mod product;
pub mod state;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::client::{ProductListing, ProductSource};
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    pub use crate::product::{Category, ExpiryStatus, Product, ProductDetails, Season};

    pub use crate::filter::{
        CategoryProfile, ExpiryFilter, FilterEngine, FilterOptions, FilterState, NumericField,
        Pagination, SortKey, StockFilter, TextField,
    };

    pub use crate::state::{CatalogState, VisiblePage};
}
