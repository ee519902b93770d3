//! Sort comparators.
//!
//! Comparators are used with `sort_by`, which is stable: products with
//! equal keys keep their relative input order, so pagination stays
//! deterministic across recomputations.

use crate::filter::state::{NumericField, SortKey};
use crate::product::Product;
use std::cmp::Ordering;

/// Compare two products under a sort key.
pub(crate) fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => name_cmp(a, b),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::RatingDesc => f64_cmp(b.average_rating, a.average_rating),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::FreshnessAsc => numeric_cmp(a, b, NumericField::Freshness, false),
        SortKey::FreshnessDesc => numeric_cmp(a, b, NumericField::Freshness, true),
        SortKey::LifespanAsc => numeric_cmp(a, b, NumericField::LifespanDays, false),
        SortKey::LifespanDesc => numeric_cmp(a, b, NumericField::LifespanDays, true),
        SortKey::PagesAsc => numeric_cmp(a, b, NumericField::PageCount, false),
        SortKey::PagesDesc => numeric_cmp(a, b, NumericField::PageCount, true),
    }
}

/// Case-insensitive name comparison, ties broken case-sensitively so
/// the order is total.
fn name_cmp(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

fn f64_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compare on a detail-record numeric field. Records missing the field
/// sort after records that carry it, regardless of direction.
fn numeric_cmp(a: &Product, b: &Product, field: NumericField, descending: bool) -> Ordering {
    match (field.extract(a), field.extract(b)) {
        (Some(va), Some(vb)) => {
            if descending {
                f64_cmp(vb, va)
            } else {
                f64_cmp(va, vb)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Money;
    use crate::product::{Category, ProductDetails};

    fn book(name: &str, price_cents: i64, pages: i64, created_at: i64) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_string(),
            category: Category::Book,
            price: Money::new(price_cents),
            discount_percent: 0,
            stock: 1,
            image_url: None,
            average_rating: 3.0,
            created_at,
            details: ProductDetails::Book {
                author: "A".to_string(),
                genre: "G".to_string(),
                page_count: pages,
            },
        }
    }

    #[test]
    fn test_name_sort_case_insensitive() {
        let a = book("apple pressing", 100, 10, 0);
        let b = book("Binding Basics", 100, 10, 0);
        assert_eq!(compare(&a, &b, SortKey::NameAsc), Ordering::Less);
    }

    #[test]
    fn test_price_directions() {
        let cheap = book("A", 500, 10, 0);
        let dear = book("B", 900, 10, 0);
        assert_eq!(compare(&cheap, &dear, SortKey::PriceAsc), Ordering::Less);
        assert_eq!(compare(&cheap, &dear, SortKey::PriceDesc), Ordering::Greater);
    }

    #[test]
    fn test_newest_first() {
        let old = book("A", 100, 10, 1_000);
        let new = book("B", 100, 10, 2_000);
        assert_eq!(compare(&new, &old, SortKey::Newest), Ordering::Less);
    }

    #[test]
    fn test_pages_sort() {
        let thin = book("A", 100, 90, 0);
        let thick = book("B", 100, 600, 0);
        assert_eq!(compare(&thin, &thick, SortKey::PagesAsc), Ordering::Less);
        assert_eq!(compare(&thin, &thick, SortKey::PagesDesc), Ordering::Greater);
    }

    #[test]
    fn test_stable_sort_keeps_input_order_on_ties() {
        let a = book("Same Price A", 100, 10, 0);
        let b = book("Same Price B", 100, 10, 0);
        let mut items = vec![b.clone(), a.clone()];
        items.sort_by(|x, y| compare(x, y, SortKey::PriceAsc));
        assert_eq!(items[0].name, "Same Price B");
        assert_eq!(items[1].name, "Same Price A");
    }
}
