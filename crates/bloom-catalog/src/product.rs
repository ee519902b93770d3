//! Product types for the shop's three departments.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Days before expiry at which a flower counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Stationery,
    Flower,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Stationery => "stationery",
            Category::Flower => "flower",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "book" => Some(Category::Book),
            // Historical spelling still accepted from older data.
            "stationery" | "stationary" => Some(Category::Stationery),
            "flower" => Some(Category::Flower),
            _ => None,
        }
    }
}

/// Season a flower is associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllYear,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::AllYear => "all-year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            "all-year" | "all year" => Some(Season::AllYear),
            _ => None,
        }
    }
}

/// Category-specific detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ProductDetails {
    Book {
        author: String,
        genre: String,
        page_count: i64,
    },
    Stationery {
        brand: String,
        /// Kind of item (pen, notebook, ...).
        kind: String,
        material: String,
        /// Available colors; matched by set membership.
        colors: Vec<String>,
    },
    Flower {
        color: String,
        season: Season,
        /// Freshness score, 0-100.
        freshness: i64,
        /// Expected vase life in days.
        lifespan_days: i64,
        expires_at: DateTime<Utc>,
    },
}

/// Expiry classification for a flower, relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryStatus {
    Fresh,
    ExpiringSoon,
    Expired,
}

/// A product in the catalog.
///
/// Read-only to the filter engine: the engine never mutates products,
/// it only selects and orders them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Department this product belongs to.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Discount percentage, 0-100. Zero means not discounted.
    pub discount_percent: i64,
    /// Units in stock.
    pub stock: i64,
    /// Image URL for listings.
    pub image_url: Option<String>,
    /// Aggregate rating, 0.0-5.0, derived externally.
    pub average_rating: f64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Category-specific details.
    pub details: ProductDetails,
}

impl Product {
    /// Create a product with sensible zero defaults.
    pub fn new(name: impl Into<String>, category: Category, price: Money, details: ProductDetails) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            category,
            price,
            discount_percent: 0,
            stock: 0,
            image_url: None,
            average_rating: 0.0,
            created_at: current_timestamp(),
            details,
        }
    }

    /// Check if the product has units in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if the product is discounted.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Effective unit price with the discount applied.
    pub fn discounted_price(&self) -> Money {
        let pct = self.discount_percent.clamp(0, 100);
        Money::new(self.price.amount_cents * (100 - pct) / 100)
    }

    /// Flower expiry date, if this product is a flower.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match &self.details {
            ProductDetails::Flower { expires_at, .. } => Some(*expires_at),
            _ => None,
        }
    }

    /// Expiry classification relative to `now`. `None` for non-flowers.
    ///
    /// This is the mutually exclusive badge classification; the filter
    /// engine's `fresh` predicate is deliberately wider (see
    /// [`crate::filter::ExpiryFilter`]).
    pub fn expiry_status(&self, now: DateTime<Utc>) -> Option<ExpiryStatus> {
        let expires_at = self.expires_at()?;
        if expires_at <= now {
            Some(ExpiryStatus::Expired)
        } else if expires_at <= now + Duration::days(EXPIRING_SOON_DAYS) {
            Some(ExpiryStatus::ExpiringSoon)
        } else {
            Some(ExpiryStatus::Fresh)
        }
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose(expires_in_days: i64) -> Product {
        Product {
            id: ProductId::new("rose"),
            name: "Red Rose".to_string(),
            category: Category::Flower,
            price: Money::from_decimal(20.0),
            discount_percent: 0,
            stock: 5,
            image_url: None,
            average_rating: 4.5,
            created_at: 0,
            details: ProductDetails::Flower {
                color: "Red".to_string(),
                season: Season::Spring,
                freshness: 90,
                lifespan_days: 10,
                expires_at: Utc::now() + Duration::days(expires_in_days),
            },
        }
    }

    #[test]
    fn test_stock_and_discount_flags() {
        let mut p = rose(30);
        assert!(p.is_in_stock());
        assert!(!p.has_discount());
        p.stock = 0;
        p.discount_percent = 10;
        assert!(!p.is_in_stock());
        assert!(p.has_discount());
    }

    #[test]
    fn test_discounted_price() {
        let mut p = rose(30);
        p.discount_percent = 25;
        assert_eq!(p.discounted_price(), Money::new(1500));
    }

    #[test]
    fn test_expiry_status_partition() {
        let now = Utc::now();
        assert_eq!(rose(30).expiry_status(now), Some(ExpiryStatus::Fresh));
        assert_eq!(rose(3).expiry_status(now), Some(ExpiryStatus::ExpiringSoon));
        assert_eq!(rose(-1).expiry_status(now), Some(ExpiryStatus::Expired));
    }

    #[test]
    fn test_expiry_status_non_flower() {
        let book = Product::new(
            "Dune",
            Category::Book,
            Money::from_decimal(12.0),
            ProductDetails::Book {
                author: "Frank Herbert".to_string(),
                genre: "Sci-Fi".to_string(),
                page_count: 412,
            },
        );
        assert_eq!(book.expiry_status(Utc::now()), None);
    }

    #[test]
    fn test_details_serde_roundtrip_with_kind_field() {
        // The stationery detail record carries a field named "kind";
        // the enum tag must not collide with it.
        let details = ProductDetails::Stationery {
            brand: "Corvid".to_string(),
            kind: "pen".to_string(),
            material: "brass".to_string(),
            colors: vec!["Black".to_string(), "Blue".to_string()],
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["category"], "stationery");
        assert_eq!(json["kind"], "pen");

        let back: ProductDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
    }

    #[test]
    fn test_category_from_str_accepts_legacy_spelling() {
        assert_eq!(Category::from_str("stationary"), Some(Category::Stationery));
        assert_eq!(Category::from_str("Book"), Some(Category::Book));
        assert_eq!(Category::from_str("unknown"), None);
    }
}
