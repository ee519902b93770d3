//! Catalog filter engine.
//!
//! One generic filter/sort/paginate pipeline, parameterized by a
//! per-category capability profile.

mod engine;
mod paginate;
mod predicate;
mod profile;
mod sort;
mod state;

pub use engine::{
    DimensionValue, FilterDimension, FilterEngine, FilterOptions, MAX_SUGGESTIONS,
    MIN_SUGGESTION_LEN,
};
pub use paginate::{page_slice, Pagination};
pub use profile::CategoryProfile;
pub use state::{
    ExpiryFilter, FieldSelection, FilterState, NumericField, RangeFilter, SortKey, StockFilter,
    TextField, ALL_SENTINEL,
};
