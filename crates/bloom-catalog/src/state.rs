//! Catalog state container.
//!
//! An explicitly constructed container, passed by reference to
//! consumers, instead of a module-level singleton store. It owns the
//! product list, the filter state, and the current page; visible
//! results are recomputed from those on every call.

use crate::client::ProductSource;
use crate::error::CatalogError;
use crate::filter::{CategoryProfile, FilterEngine, FilterOptions, FilterState, Pagination};
use crate::product::Product;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Default listing page size.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// One recomputed page of visible results.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// State for one category's listing view.
#[derive(Debug)]
pub struct CatalogState {
    engine: FilterEngine,
    products: Vec<Product>,
    filters: FilterState,
    page: i64,
    per_page: i64,
    /// Last fetch error; set only when the listing failed to load.
    error: Option<String>,
}

impl CatalogState {
    /// Create an empty state for a category profile.
    pub fn new(profile: CategoryProfile) -> Self {
        Self {
            engine: FilterEngine::new(profile),
            products: Vec::new(),
            filters: FilterState::new(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            error: None,
        }
    }

    /// Override the page size.
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Load (or reload, for retry) the listing from a source.
    ///
    /// On success the previous error is cleared and the page resets to
    /// 1. On failure the previous results are cleared rather than left
    /// stale and unlabeled, and the error is recorded.
    pub async fn load(&mut self, source: &dyn ProductSource) -> Result<(), CatalogError> {
        match source
            .fetch_products(Some(self.engine.profile().category))
            .await
        {
            Ok(listing) => {
                debug!(count = listing.products.len(), "catalog listing loaded");
                self.products = listing.products;
                self.error = None;
                self.page = 1;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "catalog listing fetch failed");
                self.products.clear();
                self.error = Some(e.to_string());
                self.page = 1;
                Err(e)
            }
        }
    }

    /// Replace the filter state. Resets the current page to 1 so a
    /// shrunk result set never lands on a silently empty deep page.
    pub fn set_filters(&mut self, filters: FilterState) {
        if self.filters != filters {
            self.filters = filters;
            self.page = 1;
        }
    }

    /// Move to a page. Out-of-range pages yield an empty slice from
    /// the engine; this container does not forbid them.
    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    /// The visible page of results, recomputed against `now`.
    pub fn visible_at(&self, now: DateTime<Utc>) -> VisiblePage {
        let ordered = self.engine.compute_at(&self.products, &self.filters, now);
        let (slice, pagination) = self.engine.paginate(&ordered, self.page, self.per_page);
        VisiblePage {
            products: slice.into_iter().cloned().collect(),
            pagination,
        }
    }

    /// The visible page against the current wall clock.
    pub fn visible(&self) -> VisiblePage {
        self.visible_at(Utc::now())
    }

    /// Derived options for filter-selection UI, from the full list.
    pub fn filter_options(&self) -> FilterOptions {
        self.engine.filter_options(&self.products)
    }

    /// Search suggestions for a term.
    pub fn suggestions(&self, term: &str) -> Vec<String> {
        self.engine.suggestions(&self.products, term)
    }

    /// The last fetch error, if the listing is in an error state.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The full unfiltered product list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current page.
    pub fn page(&self) -> i64 {
        self.page
    }
}
