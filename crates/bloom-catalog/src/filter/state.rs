//! Filter state: everything the UI can set on a catalog listing.

use crate::product::{Product, ProductDetails};
use serde::{Deserialize, Serialize};

/// Sentinel value meaning "no constraint" on a categorical filter.
pub const ALL_SENTINEL: &str = "all";

/// A text dimension a category can expose for search or filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Name,
    Color,
    Season,
    Author,
    Genre,
    Brand,
    Kind,
    Material,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Color => "color",
            TextField::Season => "season",
            TextField::Author => "author",
            TextField::Genre => "genre",
            TextField::Brand => "brand",
            TextField::Kind => "kind",
            TextField::Material => "material",
        }
    }

    /// Extract this field's values from a product.
    ///
    /// Multi-valued for fields like stationery colors. Returns `None`
    /// when the product's detail record does not carry the field, which
    /// callers treat as a malformed record for this dimension.
    pub fn extract<'a>(&self, product: &'a Product) -> Option<Vec<&'a str>> {
        match (self, &product.details) {
            (TextField::Name, _) => Some(vec![product.name.as_str()]),
            (TextField::Color, ProductDetails::Flower { color, .. }) => Some(vec![color.as_str()]),
            (TextField::Color, ProductDetails::Stationery { colors, .. }) => {
                Some(colors.iter().map(|c| c.as_str()).collect())
            }
            (TextField::Season, ProductDetails::Flower { season, .. }) => {
                Some(vec![season.as_str()])
            }
            (TextField::Author, ProductDetails::Book { author, .. }) => Some(vec![author.as_str()]),
            (TextField::Genre, ProductDetails::Book { genre, .. }) => Some(vec![genre.as_str()]),
            (TextField::Brand, ProductDetails::Stationery { brand, .. }) => {
                Some(vec![brand.as_str()])
            }
            (TextField::Kind, ProductDetails::Stationery { kind, .. }) => Some(vec![kind.as_str()]),
            (TextField::Material, ProductDetails::Stationery { material, .. }) => {
                Some(vec![material.as_str()])
            }
            _ => None,
        }
    }
}

/// A numeric dimension a category can expose for range filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Price,
    Freshness,
    LifespanDays,
    PageCount,
}

impl NumericField {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericField::Price => "price",
            NumericField::Freshness => "freshness",
            NumericField::LifespanDays => "lifespan_days",
            NumericField::PageCount => "page_count",
        }
    }

    /// Extract this field's value from a product.
    ///
    /// Returns `None` when the product's detail record does not carry
    /// the field.
    pub fn extract(&self, product: &Product) -> Option<f64> {
        match (self, &product.details) {
            (NumericField::Price, _) => Some(product.price.as_decimal()),
            (NumericField::Freshness, ProductDetails::Flower { freshness, .. }) => {
                Some(*freshness as f64)
            }
            (NumericField::LifespanDays, ProductDetails::Flower { lifespan_days, .. }) => {
                Some(*lifespan_days as f64)
            }
            (NumericField::PageCount, ProductDetails::Book { page_count, .. }) => {
                Some(*page_count as f64)
            }
            _ => None,
        }
    }
}

/// Stock-presence filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Expiry-status filter (flowers only).
///
/// `Fresh` and `ExpiringSoon` deliberately overlap: both require a
/// future expiry, `ExpiringSoon` additionally requires it within seven
/// days. This mirrors the shop's established listing behavior and is
/// not a partition; do not "fix" it without a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryFilter {
    #[default]
    All,
    Fresh,
    ExpiringSoon,
    Expired,
}

/// Sort order for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name A-Z (the default and the fallback for unknown keys).
    #[default]
    NameAsc,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// Newest first.
    Newest,
    FreshnessAsc,
    FreshnessDesc,
    LifespanAsc,
    LifespanDesc,
    PagesAsc,
    PagesDesc,
}

impl SortKey {
    /// Parse a sort key string; unknown values fall back to name A-Z.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "name" | "name-asc" => SortKey::NameAsc,
            "price-low" | "price-asc" => SortKey::PriceAsc,
            "price-high" | "price-desc" => SortKey::PriceDesc,
            "rating" | "rating-desc" => SortKey::RatingDesc,
            "newest" => SortKey::Newest,
            "freshness-low" => SortKey::FreshnessAsc,
            "freshness-high" => SortKey::FreshnessDesc,
            "lifespan-low" => SortKey::LifespanAsc,
            "lifespan-high" => SortKey::LifespanDesc,
            "pages-low" => SortKey::PagesAsc,
            "pages-high" => SortKey::PagesDesc,
            _ => SortKey::NameAsc,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name: A-Z",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::FreshnessAsc => "Freshness: Low to High",
            SortKey::FreshnessDesc => "Freshness: High to Low",
            SortKey::LifespanAsc => "Lifespan: Short to Long",
            SortKey::LifespanDesc => "Lifespan: Long to Short",
            SortKey::PagesAsc => "Pages: Few to Many",
            SortKey::PagesDesc => "Pages: Many to Few",
        }
    }
}

/// A categorical equality filter on one text dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelection {
    pub field: TextField,
    /// Selected value; empty or `"all"` imposes no constraint.
    pub value: String,
}

impl FieldSelection {
    pub fn new(field: TextField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Whether this selection constrains anything.
    pub fn is_active(&self) -> bool {
        !self.value.is_empty() && !self.value.eq_ignore_ascii_case(ALL_SENTINEL)
    }
}

/// A numeric range filter with raw string bounds.
///
/// Bounds are kept as the strings the user typed. A bound that does
/// not parse as a finite number is treated as unset (fail open): bad
/// input widens the result set, it never hides everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub field: NumericField,
    pub min: String,
    pub max: String,
}

impl RangeFilter {
    pub fn new(field: NumericField, min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            field,
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn parsed_min(&self) -> Option<f64> {
        parse_bound(&self.min)
    }

    pub fn parsed_max(&self) -> Option<f64> {
        parse_bound(&self.max)
    }

    /// Whether at least one bound is set and parsable.
    pub fn is_active(&self) -> bool {
        self.parsed_min().is_some() || self.parsed_max().is_some()
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The full filter state for one catalog listing.
///
/// Immutable per recomputation: consumers build a new value (or clone
/// and adjust) and hand it to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Free-text search; empty matches everything.
    pub search: String,
    /// Categorical equality filters.
    pub selections: Vec<FieldSelection>,
    /// Numeric range filters.
    pub ranges: Vec<RangeFilter>,
    /// Minimum average rating; 0 means no constraint.
    pub rating_floor: f64,
    /// Stock-presence filter.
    pub stock: StockFilter,
    /// Only show discounted products.
    pub discount_only: bool,
    /// Expiry-status filter (flowers only).
    pub expiry: ExpiryFilter,
    /// Sort order.
    pub sort: SortKey,
}

impl FilterState {
    /// A filter state with every predicate at its permissive default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_selection(mut self, field: TextField, value: impl Into<String>) -> Self {
        self.selections.push(FieldSelection::new(field, value));
        self
    }

    pub fn with_range(
        mut self,
        field: NumericField,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        self.ranges.push(RangeFilter::new(field, min, max));
        self
    }

    pub fn with_rating_floor(mut self, floor: f64) -> Self {
        self.rating_floor = floor;
        self
    }

    pub fn with_stock(mut self, stock: StockFilter) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_discount_only(mut self, discount_only: bool) -> Self {
        self.discount_only = discount_only;
        self
    }

    pub fn with_expiry(mut self, expiry: ExpiryFilter) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_selection_inactive() {
        assert!(!FieldSelection::new(TextField::Color, "all").is_active());
        assert!(!FieldSelection::new(TextField::Color, "ALL").is_active());
        assert!(!FieldSelection::new(TextField::Color, "").is_active());
        assert!(FieldSelection::new(TextField::Color, "Red").is_active());
    }

    #[test]
    fn test_range_fail_open_parsing() {
        let r = RangeFilter::new(NumericField::Price, "10", "oops");
        assert_eq!(r.parsed_min(), Some(10.0));
        assert_eq!(r.parsed_max(), None);
        assert!(r.is_active());

        let garbage = RangeFilter::new(NumericField::Price, "abc", "NaN");
        assert!(!garbage.is_active());
    }

    #[test]
    fn test_sort_key_fallback() {
        assert_eq!(SortKey::from_str("price-high"), SortKey::PriceDesc);
        assert_eq!(SortKey::from_str("bogus"), SortKey::NameAsc);
        assert_eq!(SortKey::from_str(""), SortKey::NameAsc);
    }

    #[test]
    fn test_builder_chain() {
        let f = FilterState::new()
            .with_search("rose")
            .with_selection(TextField::Color, "Red")
            .with_range(NumericField::Price, "5", "25")
            .with_stock(StockFilter::InStock)
            .with_sort(SortKey::PriceDesc);
        assert_eq!(f.search, "rose");
        assert_eq!(f.selections.len(), 1);
        assert_eq!(f.ranges.len(), 1);
        assert_eq!(f.stock, StockFilter::InStock);
        assert_eq!(f.sort, SortKey::PriceDesc);
    }
}
