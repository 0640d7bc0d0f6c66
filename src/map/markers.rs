//! Marker definitions and marker-set diffing.
//!
//! Markers carry the eatery id as their stable key so marker identity is
//! preserved across filter changes: when an unrelated filter edit leaves an
//! eatery visible, its marker is retained rather than remounted (no flicker).
//! Eateries with missing or out-of-range coordinates simply produce no
//! marker; they never crash the map and stay eligible for list rendering and
//! search.

use crate::domain::{Coordinates, Eatery, EateryId};
use std::collections::HashSet;
use std::sync::Arc;

/// A marker to be placed on the mapping widget.
///
/// Identity is the eatery id; position is pre-validated so the widget never
/// sees an out-of-range coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerDef {
    /// Stable marker key (the eatery id).
    pub id: EateryId,

    /// Validated geographic position.
    pub position: Coordinates,
}

/// Derives the marker set for a filtered view.
///
/// One marker per eatery with valid coordinates, in filter order. The "no
/// eateries match" case yields an empty set, not an error.
#[must_use]
pub fn markers_for(eateries: &[Arc<Eatery>]) -> Vec<MarkerDef> {
    eateries
        .iter()
        .filter_map(|eatery| {
            eatery
                .valid_coordinates()
                .map(|position| MarkerDef { id: eatery.id, position })
        })
        .collect()
}

/// The delta between two marker sets, keyed by marker id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerDiff {
    /// Markers present in the next set but not the current one.
    pub added: Vec<MarkerDef>,

    /// Ids present in the current set but not the next one.
    pub removed: Vec<EateryId>,
}

impl MarkerDiff {
    /// Returns `true` when the sets are identical by id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Computes the id-keyed delta from `current` to `next`.
///
/// Markers present in both sets are retained untouched, which is what
/// preserves their identity (and any in-progress widget animation) across
/// filter edits.
#[must_use]
pub fn diff_markers(current: &[MarkerDef], next: &[MarkerDef]) -> MarkerDiff {
    let current_ids: HashSet<EateryId> = current.iter().map(|m| m.id).collect();
    let next_ids: HashSet<EateryId> = next.iter().map(|m| m.id).collect();

    MarkerDiff {
        added: next
            .iter()
            .filter(|m| !current_ids.contains(&m.id))
            .copied()
            .collect(),
        removed: current
            .iter()
            .map(|m| m.id)
            .filter(|id| !next_ids.contains(id))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eatery(id: EateryId, lat: f64, lon: f64) -> Arc<Eatery> {
        Arc::new(Eatery {
            id,
            name: format!("Eatery {id}"),
            description: String::new(),
            city: "Lusaka".to_string(),
            category: "Cafe".to_string(),
            latitude: Some(lat),
            longitude: Some(lon),
            media: vec![],
            review: None,
            place_id: None,
        })
    }

    #[test]
    fn one_marker_per_valid_eatery() {
        let eateries = vec![eatery(1, -15.4, 28.3), eatery(2, -12.8, 28.2)];
        let markers = markers_for(&eateries);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].id, 1);
    }

    #[test]
    fn invalid_coordinates_produce_no_marker() {
        let eateries = vec![eatery(1, 999.0, 28.3), eatery(2, -12.8, 28.2)];
        let markers = markers_for(&eateries);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, 2);
    }

    #[test]
    fn empty_view_renders_zero_markers() {
        assert!(markers_for(&[]).is_empty());
    }

    #[test]
    fn diff_retains_surviving_markers() {
        let before = markers_for(&[eatery(1, -15.4, 28.3), eatery(2, -12.8, 28.2)]);
        let after = markers_for(&[eatery(2, -12.8, 28.2), eatery(3, -17.8, 25.9)]);

        let diff = diff_markers(&before, &after);
        assert_eq!(diff.added.len(), 1);
        assert_eq!(diff.added[0].id, 3);
        assert_eq!(diff.removed, vec![1]);
    }

    #[test]
    fn identical_sets_diff_to_nothing() {
        let markers = markers_for(&[eatery(1, -15.4, 28.3)]);
        assert!(diff_markers(&markers, &markers).is_empty());
    }
}
