//! Predicate evaluation for one product against a filter state.
//!
//! Filtering is a logical AND: a product is included iff every active
//! predicate matches. An active predicate that cannot read the field
//! it needs (detail record does not carry it) yields a malformed
//! verdict; the engine excludes that one product and keeps going.

use crate::filter::profile::CategoryProfile;
use crate::filter::state::{ExpiryFilter, FilterState, StockFilter};
use crate::product::{Product, EXPIRING_SOON_DAYS};
use chrono::{DateTime, Duration, Utc};

/// Outcome of evaluating all predicates for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    Include,
    Exclude,
    /// An active predicate hit a detail record missing the named field.
    Malformed(&'static str),
}

pub(crate) fn evaluate(
    product: &Product,
    filters: &FilterState,
    profile: &CategoryProfile,
    now: DateTime<Utc>,
) -> Verdict {
    // Free-text search over name plus the profile's searchable fields.
    // Fields the record does not carry simply contribute nothing here;
    // the record is only malformed for predicates that require a field.
    let needle = filters.search.trim().to_lowercase();
    if !needle.is_empty() {
        let mut hit = product.name.to_lowercase().contains(&needle);
        if !hit {
            for field in &profile.searchable {
                if let Some(values) = field.extract(product) {
                    if values.iter().any(|v| v.to_lowercase().contains(&needle)) {
                        hit = true;
                        break;
                    }
                }
            }
        }
        if !hit {
            return Verdict::Exclude;
        }
    }

    // Categorical equality (set membership for multi-valued fields).
    for selection in filters.selections.iter().filter(|s| s.is_active()) {
        let Some(values) = selection.field.extract(product) else {
            return Verdict::Malformed(selection.field.as_str());
        };
        if !values
            .iter()
            .any(|v| v.eq_ignore_ascii_case(&selection.value))
        {
            return Verdict::Exclude;
        }
    }

    // Numeric ranges. Unparsable bounds are already unset (fail open).
    for range in filters.ranges.iter().filter(|r| r.is_active()) {
        let Some(value) = range.field.extract(product) else {
            return Verdict::Malformed(range.field.as_str());
        };
        if let Some(min) = range.parsed_min() {
            if value < min {
                return Verdict::Exclude;
            }
        }
        if let Some(max) = range.parsed_max() {
            if value > max {
                return Verdict::Exclude;
            }
        }
    }

    // Rating floor; zero means unconstrained.
    if filters.rating_floor > 0.0 && product.average_rating < filters.rating_floor {
        return Verdict::Exclude;
    }

    match filters.stock {
        StockFilter::All => {}
        StockFilter::InStock => {
            if product.stock <= 0 {
                return Verdict::Exclude;
            }
        }
        StockFilter::OutOfStock => {
            if product.stock != 0 {
                return Verdict::Exclude;
            }
        }
    }

    if filters.discount_only && !product.has_discount() {
        return Verdict::Exclude;
    }

    // Expiry status, only for profiles that carry it (a stale expiry
    // selection on a books listing is inactive, like an unsupported
    // sort key). `Fresh` accepts anything with a future expiry, so it
    // overlaps `ExpiringSoon`; see `ExpiryFilter` for why.
    if profile.has_expiry && filters.expiry != ExpiryFilter::All {
        let Some(expires_at) = product.expires_at() else {
            return Verdict::Malformed("expires_at");
        };
        let soon_cutoff = now + Duration::days(EXPIRING_SOON_DAYS);
        let matches = match filters.expiry {
            ExpiryFilter::All => true,
            ExpiryFilter::Fresh => expires_at > now,
            ExpiryFilter::ExpiringSoon => expires_at > now && expires_at <= soon_cutoff,
            ExpiryFilter::Expired => expires_at <= now,
        };
        if !matches {
            return Verdict::Exclude;
        }
    }

    Verdict::Include
}
