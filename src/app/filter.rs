//! Pure filter engine over the eatery catalog.
//!
//! The filter is a pure function from (catalog, search text, category) to an
//! ordered subset of the catalog. It is deterministic, idempotent, and
//! order-preserving: the result is always a subsequence of the catalog in the
//! catalog's own order (a stable filter, never a re-sort). An empty result is
//! a valid outcome, distinct from "catalog not yet loaded" which the
//! application state tracks separately.

use crate::domain::Eatery;
use std::sync::Arc;

/// Category sentinel meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "All";

/// Filters the catalog by free-text search and category selection.
///
/// An eatery is included iff the category matches (`category` is
/// [`ALL_CATEGORIES`] or equals the eatery's category exactly) and the search
/// text matches (`search_text` is empty, or it is a case-insensitive
/// substring of the eatery's name or description).
///
/// Search text consisting only of whitespace is matched literally, mirroring
/// substring semantics rather than a trim-then-empty special case; it will
/// typically match nothing.
///
/// # Examples
///
/// ```
/// use eatery_map::app::filter::{filter_catalog, ALL_CATEGORIES};
/// use eatery_map::domain::Eatery;
/// use std::sync::Arc;
///
/// let catalog: Vec<Arc<Eatery>> = vec![];
/// assert!(filter_catalog(&catalog, "anything", ALL_CATEGORIES).is_empty());
/// ```
#[must_use]
pub fn filter_catalog(
    catalog: &[Arc<Eatery>],
    search_text: &str,
    category: &str,
) -> Vec<Arc<Eatery>> {
    let needle = search_text.to_lowercase();

    catalog
        .iter()
        .filter(|eatery| matches_category(eatery, category) && matches_search(eatery, &needle))
        .cloned()
        .collect()
}

/// Returns `true` if the eatery passes the category selection.
fn matches_category(eatery: &Eatery, category: &str) -> bool {
    category == ALL_CATEGORIES || eatery.category == category
}

/// Returns `true` if the eatery passes the (already lowercased) search text.
fn matches_search(eatery: &Eatery, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    eatery.name.to_lowercase().contains(needle)
        || eatery.description.to_lowercase().contains(needle)
}
