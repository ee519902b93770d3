//! The catalog filter engine facade.
//!
//! Pure and synchronous: `compute_at` is a function of the product
//! list, the filter state, and the clock value passed in. It holds no
//! hidden state and is safe to call on every input change.

use crate::filter::paginate::{page_slice, Pagination};
use crate::filter::predicate::{evaluate, Verdict};
use crate::filter::profile::CategoryProfile;
use crate::filter::sort;
use crate::filter::state::{FilterState, TextField};
use crate::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum search-term length before suggestions are produced.
pub const MIN_SUGGESTION_LEN: usize = 2;

/// Maximum number of search suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// One value of a filter dimension, with its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensionValue {
    pub value: String,
    pub count: i64,
}

/// Distinct values for one categorical filter dimension,
/// in first-occurrence order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterDimension {
    pub field: TextField,
    pub values: Vec<DimensionValue>,
}

/// Derived filter options for populating selection UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterOptions {
    pub dimensions: Vec<FilterDimension>,
}

impl FilterOptions {
    /// Values for one dimension, if derived.
    pub fn values_for(&self, field: TextField) -> Option<&[DimensionValue]> {
        self.dimensions
            .iter()
            .find(|d| d.field == field)
            .map(|d| d.values.as_slice())
    }
}

/// Filter, sort, and paginate a category's product listing.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    profile: CategoryProfile,
}

impl FilterEngine {
    /// Create an engine for a category profile.
    pub fn new(profile: CategoryProfile) -> Self {
        Self { profile }
    }

    /// The engine's capability profile.
    pub fn profile(&self) -> &CategoryProfile {
        &self.profile
    }

    /// Filter and sort against the clock value `now`.
    ///
    /// Products whose detail record cannot satisfy an active predicate
    /// are dropped individually and logged; the computation never fails
    /// as a whole on bad data.
    pub fn compute_at<'a>(
        &self,
        products: &'a [Product],
        filters: &FilterState,
        now: DateTime<Utc>,
    ) -> Vec<&'a Product> {
        let mut selected: Vec<&Product> = Vec::new();
        for product in products {
            match evaluate(product, filters, &self.profile, now) {
                Verdict::Include => selected.push(product),
                Verdict::Exclude => {}
                Verdict::Malformed(field) => {
                    warn!(
                        product_id = %product.id,
                        field,
                        "excluding product with malformed detail record"
                    );
                }
            }
        }

        let key = self.profile.effective_sort(filters.sort);
        // sort_by is stable: ties keep input order.
        selected.sort_by(|a, b| sort::compare(a, b, key));
        selected
    }

    /// Filter and sort against the current wall clock.
    pub fn compute<'a>(&self, products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
        self.compute_at(products, filters, Utc::now())
    }

    /// Slice one 1-based page out of an ordered result.
    pub fn paginate<'a>(
        &self,
        ordered: &[&'a Product],
        page: i64,
        per_page: i64,
    ) -> (Vec<&'a Product>, Pagination) {
        let slice = page_slice(ordered, page, per_page).to_vec();
        (slice, Pagination::new(page, per_page, ordered.len() as i64))
    }

    /// Derive distinct values per categorical dimension from the full,
    /// unfiltered list. Duplicates collapse; order is first occurrence.
    pub fn filter_options(&self, products: &[Product]) -> FilterOptions {
        let mut dimensions = Vec::new();
        for field in &self.profile.categorical {
            let mut values: Vec<DimensionValue> = Vec::new();
            for product in products {
                let Some(extracted) = field.extract(product) else {
                    continue;
                };
                for value in extracted {
                    if value.is_empty() {
                        continue;
                    }
                    match values
                        .iter_mut()
                        .find(|v| v.value.eq_ignore_ascii_case(value))
                    {
                        Some(existing) => existing.count += 1,
                        None => values.push(DimensionValue {
                            value: value.to_string(),
                            count: 1,
                        }),
                    }
                }
            }
            dimensions.push(FilterDimension {
                field: *field,
                values,
            });
        }
        FilterOptions { dimensions }
    }

    /// Up to five distinct suggestion tokens for a search term of at
    /// least two characters, matched case-insensitively against names
    /// and categorical text values.
    pub fn suggestions(&self, products: &[Product], term: &str) -> Vec<String> {
        let needle = term.trim().to_lowercase();
        if needle.chars().count() < MIN_SUGGESTION_LEN {
            return Vec::new();
        }

        let mut out: Vec<String> = Vec::new();
        let push = |candidate: &str, out: &mut Vec<String>| {
            if out.len() >= MAX_SUGGESTIONS {
                return;
            }
            if candidate.to_lowercase().contains(&needle)
                && !out.iter().any(|s| s.eq_ignore_ascii_case(candidate))
            {
                out.push(candidate.to_string());
            }
        };

        for product in products {
            push(&product.name, &mut out);
            for field in &self.profile.categorical {
                if let Some(values) = field.extract(product) {
                    for value in values {
                        push(value, &mut out);
                    }
                }
            }
            if out.len() >= MAX_SUGGESTIONS {
                break;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::state::{SortKey, StockFilter};
    use crate::ids::ProductId;
    use crate::money::Money;
    use crate::product::{Category, ProductDetails, Season};
    use chrono::Duration;

    fn flower(name: &str, color: &str, price: f64, stock: i64, discount: i64) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_string(),
            category: Category::Flower,
            price: Money::from_decimal(price),
            discount_percent: discount,
            stock,
            image_url: None,
            average_rating: 4.0,
            created_at: 0,
            details: ProductDetails::Flower {
                color: color.to_string(),
                season: if color == "Red" {
                    Season::Spring
                } else {
                    Season::Summer
                },
                freshness: 80,
                lifespan_days: 10,
                expires_at: Utc::now() + Duration::days(30),
            },
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            flower("Red Rose", "Red", 20.0, 5, 0),
            flower("White Lily", "White", 15.0, 0, 10),
        ]
    }

    fn engine() -> FilterEngine {
        FilterEngine::new(CategoryProfile::flowers())
    }

    #[test]
    fn test_in_stock_scenario() {
        let products = sample();
        let filters = FilterState::new().with_stock(StockFilter::InStock);
        let result = engine().compute(&products, &filters);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Red Rose"]);
    }

    #[test]
    fn test_discount_scenario() {
        let products = sample();
        let filters = FilterState::new().with_discount_only(true);
        let result = engine().compute(&products, &filters);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["White Lily"]);
    }

    #[test]
    fn test_price_high_scenario() {
        let products = sample();
        let filters = FilterState::new().with_sort(SortKey::PriceDesc);
        let result = engine().compute(&products, &filters);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Red Rose", "White Lily"]);
    }

    #[test]
    fn test_compute_is_pure() {
        let products = sample();
        let filters = FilterState::new().with_sort(SortKey::PriceDesc);
        let now = Utc::now();
        let once = engine().compute_at(&products, &filters, now);
        let twice = engine().compute_at(&products, &filters, now);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_options_distinct_first_occurrence() {
        let mut products = sample();
        products.push(flower("Crimson Rose", "Red", 22.0, 2, 0));
        let options = engine().filter_options(&products);
        let colors = options.values_for(TextField::Color).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].value, "Red");
        assert_eq!(colors[0].count, 2);
        assert_eq!(colors[1].value, "White");
    }

    #[test]
    fn test_suggestions_threshold_and_cap() {
        let products = sample();
        let e = engine();
        assert!(e.suggestions(&products, "r").is_empty());
        let hits = e.suggestions(&products, "ro");
        assert_eq!(hits, vec!["Red Rose".to_string()]);
        assert!(e.suggestions(&products, "zzz").is_empty());
        // The threshold counts characters, not bytes.
        assert!(e.suggestions(&products, "é").is_empty());
    }

    #[test]
    fn test_paginate_roundtrip() {
        let products: Vec<Product> = (0..30)
            .map(|i| flower(&format!("Flower {:02}", i), "Red", 10.0, 1, 0))
            .collect();
        let e = engine();
        let ordered = e.compute(&products, &FilterState::new());
        let (_, pagination) = e.paginate(&ordered, 1, 12);
        assert_eq!(pagination.total_pages, 3);

        let mut rebuilt = Vec::new();
        for page in 1..=pagination.total_pages {
            let (slice, _) = e.paginate(&ordered, page, 12);
            rebuilt.extend(slice);
        }
        assert_eq!(rebuilt, ordered);

        let (beyond, _) = e.paginate(&ordered, 99, 12);
        assert!(beyond.is_empty());
    }
}
