//! Client-side filtering and sorting of a cached collection.
//!
//! The cache holds whatever the server returned; everything here is a
//! pure projection of it, applied on every render.

use acadia_model::{FilterValue, Record};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// Active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Column (record field) to sort by.
    pub field: &'static str,
    /// Direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `field`.
    #[inline]
    #[must_use]
    pub fn ascending(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`.
    #[inline]
    #[must_use]
    pub fn descending(field: &'static str) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Case-insensitive substring match over the record's search fields.
fn matches_search<R: Record>(record: &R, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    record
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Apply search, active filters, and sort to a cached collection.
///
/// Order is preserved from the cache unless `sort` is set; the sort is
/// stable, so equal keys keep cache order. Records that lack the sorted
/// column go last.
pub fn visible<R: Record>(
    rows: &[R],
    search_text: &str,
    filters: &IndexMap<&'static str, FilterValue>,
    sort: Option<&SortSpec>,
) -> Vec<R> {
    let needle = search_text.trim().to_lowercase();
    let mut rows: Vec<R> = rows
        .iter()
        .filter(|record| {
            matches_search(*record, &needle)
                && filters
                    .iter()
                    .all(|(name, value)| record.matches_filter(name, value))
        })
        .cloned()
        .collect();

    if let Some(spec) = sort {
        rows.sort_by(|a, b| compare(a, b, spec));
    }
    rows
}

fn compare<R: Record>(a: &R, b: &R, spec: &SortSpec) -> Ordering {
    match (a.sort_key(spec.field), b.sort_key(spec.field)) {
        (Some(ka), Some(kb)) => {
            let ordering = ka.compare(&kb);
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
