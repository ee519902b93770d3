//! Per-category capability profiles.
//!
//! One generic engine serves books, stationery, and flowers; what
//! differs between them is captured here as data: which text fields
//! are searchable, which dimensions can be filtered, which numeric
//! ranges apply, and which sort keys the category supports.

use crate::filter::state::{NumericField, SortKey, TextField};
use crate::product::Category;
use serde::{Deserialize, Serialize};

/// The capability table for one category's listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub category: Category,
    /// Fields the free-text search matches against (name is implicit).
    pub searchable: Vec<TextField>,
    /// Dimensions offered as categorical filters.
    pub categorical: Vec<TextField>,
    /// Dimensions offered as numeric range filters.
    pub ranges: Vec<NumericField>,
    /// Sort keys this category supports.
    pub sort_keys: Vec<SortKey>,
    /// Whether the expiry filter applies.
    pub has_expiry: bool,
}

impl CategoryProfile {
    /// Profile for the book department.
    pub fn books() -> Self {
        Self {
            category: Category::Book,
            searchable: vec![TextField::Author, TextField::Genre],
            categorical: vec![TextField::Author, TextField::Genre],
            ranges: vec![NumericField::Price, NumericField::PageCount],
            sort_keys: vec![
                SortKey::NameAsc,
                SortKey::PriceAsc,
                SortKey::PriceDesc,
                SortKey::RatingDesc,
                SortKey::Newest,
                SortKey::PagesAsc,
                SortKey::PagesDesc,
            ],
            has_expiry: false,
        }
    }

    /// Profile for the stationery department.
    pub fn stationery() -> Self {
        Self {
            category: Category::Stationery,
            searchable: vec![TextField::Brand, TextField::Kind, TextField::Material],
            categorical: vec![
                TextField::Brand,
                TextField::Kind,
                TextField::Material,
                TextField::Color,
            ],
            ranges: vec![NumericField::Price],
            sort_keys: vec![
                SortKey::NameAsc,
                SortKey::PriceAsc,
                SortKey::PriceDesc,
                SortKey::RatingDesc,
                SortKey::Newest,
            ],
            has_expiry: false,
        }
    }

    /// Profile for the flower department.
    pub fn flowers() -> Self {
        Self {
            category: Category::Flower,
            searchable: vec![TextField::Color, TextField::Season],
            categorical: vec![TextField::Color, TextField::Season],
            ranges: vec![
                NumericField::Price,
                NumericField::Freshness,
                NumericField::LifespanDays,
            ],
            sort_keys: vec![
                SortKey::NameAsc,
                SortKey::PriceAsc,
                SortKey::PriceDesc,
                SortKey::RatingDesc,
                SortKey::Newest,
                SortKey::FreshnessAsc,
                SortKey::FreshnessDesc,
                SortKey::LifespanAsc,
                SortKey::LifespanDesc,
            ],
            has_expiry: true,
        }
    }

    /// Profile for a category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Book => Self::books(),
            Category::Stationery => Self::stationery(),
            Category::Flower => Self::flowers(),
        }
    }

    /// Whether this category supports a sort key.
    pub fn supports_sort(&self, key: SortKey) -> bool {
        self.sort_keys.contains(&key)
    }

    /// The sort key to actually use: unsupported keys fall back to
    /// name A-Z so a stale key never breaks a listing.
    pub fn effective_sort(&self, key: SortKey) -> SortKey {
        if self.supports_sort(key) {
            key
        } else {
            SortKey::NameAsc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_cover_their_category() {
        assert_eq!(CategoryProfile::books().category, Category::Book);
        assert_eq!(CategoryProfile::flowers().category, Category::Flower);
        assert!(CategoryProfile::flowers().has_expiry);
        assert!(!CategoryProfile::books().has_expiry);
    }

    #[test]
    fn test_effective_sort_fallback() {
        let books = CategoryProfile::books();
        assert_eq!(books.effective_sort(SortKey::PagesDesc), SortKey::PagesDesc);
        // Freshness is a flower dimension; books fall back to name.
        assert_eq!(books.effective_sort(SortKey::FreshnessDesc), SortKey::NameAsc);
    }

    #[test]
    fn test_for_category() {
        assert_eq!(
            CategoryProfile::for_category(Category::Stationery),
            CategoryProfile::stationery()
        );
    }
}
