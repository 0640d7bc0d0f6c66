//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! discovery subsystem, along with methods for filtering, selection lookup,
//! and UI view model generation. It serves as the single source of truth for
//! all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the immutable catalog) from derived state
//! (the filtered view) and interaction state (selection, overlay and sidebar
//! flags, review fetch state). Each field has exactly one writer — the event
//! handler — so the map view, sidebar, and overlay are pure readers and
//! cannot race each other. View models are computed on demand from state
//! snapshots.
//!
//! # State Components
//!
//! - **Catalog**: Immutable-per-session eatery records, shared via `Arc`
//! - **Filtered view**: Subset after applying search text and category
//! - **Selection**: The single eatery highlighted across list, map, overlay
//! - **Fetch state**: The one review fetch that can be relevant at a time

use crate::app::filter::{self, ALL_CATEGORIES};
use crate::domain::{Eatery, EateryId, FetchState};
use crate::ui::viewmodel::{
    EateryListItem, EmptyState, OverlayViewModel, ReviewItem, ReviewsSection, SidebarViewModel,
};
use std::sync::Arc;

/// Central application state container.
///
/// Holds the catalog, the derived filtered view, and all interaction state.
/// Mutated only by the event handler in response to user input and worker
/// responses; every other component reads immutable snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable catalog of eatery records, in source order.
    ///
    /// Populated once from a static list or a one-shot content-API fetch.
    /// Records are shared by reference with the filtered view.
    pub catalog: Vec<Arc<Eatery>>,

    /// Whether the catalog load has completed (successfully or not).
    ///
    /// Distinguishes "no eateries match" and "no eateries exist" from
    /// "not yet loaded", which would otherwise be indistinguishable empty
    /// vectors.
    pub catalog_loaded: bool,

    /// Eateries matching the current search text and category.
    ///
    /// Recomputed by [`AppState::apply_filter`] after every filter edit or
    /// catalog change. Always a stable subsequence of `catalog`.
    pub filtered: Vec<Arc<Eatery>>,

    /// Current free-text search query, mutated on every keystroke.
    pub search_text: String,

    /// Current category selection; [`ALL_CATEGORIES`] disables the filter.
    pub category: String,

    /// Id of the currently selected eatery, if any.
    ///
    /// Survives overlay close so reopening the same eatery is fetch-free.
    pub selected: Option<EateryId>,

    /// Whether the detail overlay is visible.
    ///
    /// Invariant: `overlay_open` implies `selected.is_some()`. Maintained by
    /// the event handler, which only opens the overlay on a resolved
    /// selection.
    pub overlay_open: bool,

    /// Whether the list sidebar is expanded.
    pub sidebar_open: bool,

    /// State of the third-party review fetch for the current selection.
    pub fetch_state: FetchState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty application state: no catalog, no selection, sidebar
    /// open, fetch state idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            catalog_loaded: false,
            filtered: Vec::new(),
            search_text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            selected: None,
            overlay_open: false,
            sidebar_open: true,
            fetch_state: FetchState::Idle,
        }
    }

    /// Creates a state pre-populated with an in-process catalog.
    ///
    /// Marks the catalog as loaded and computes the initial (unfiltered)
    /// view. Used by hosts that ship a static eatery list instead of
    /// fetching one.
    #[must_use]
    pub fn with_catalog(eateries: Vec<Eatery>) -> Self {
        let mut state = Self::new();
        state.set_catalog(eateries);
        state
    }

    /// Replaces the catalog and recomputes the filtered view.
    ///
    /// Called when the worker delivers the one-shot catalog load (or its
    /// failure, with an empty list). Existing selection is kept: a selected
    /// id that no longer resolves simply renders no overlay content.
    pub fn set_catalog(&mut self, eateries: Vec<Eatery>) {
        self.catalog = eateries.into_iter().map(Arc::new).collect();
        self.catalog_loaded = true;
        self.apply_filter();
    }

    /// Applies the current search text and category to the catalog.
    ///
    /// Delegates to the pure [`filter::filter_catalog`] engine and stores the
    /// result. Selection is deliberately untouched: an eatery that falls out
    /// of the filtered view stays selected and its overlay keeps rendering
    /// from the catalog-wide record.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            catalog_len = self.catalog.len(),
            query_len = self.search_text.len(),
            category = %self.category
        )
        .entered();

        self.filtered = filter::filter_catalog(&self.catalog, &self.search_text, &self.category);

        tracing::debug!(filtered_count = self.filtered.len(), "filter applied");
    }

    /// Looks up an eatery by id across the whole catalog.
    ///
    /// Selection resolves against the catalog, not the filtered view, so a
    /// marker whose record just fell out of the filter can still be selected.
    #[must_use]
    pub fn eatery_by_id(&self, id: EateryId) -> Option<&Arc<Eatery>> {
        self.catalog.iter().find(|e| e.id == id)
    }

    /// Returns the currently selected eatery record, if the selection
    /// resolves.
    #[must_use]
    pub fn selected_eatery(&self) -> Option<&Arc<Eatery>> {
        self.selected.and_then(|id| self.eatery_by_id(id))
    }

    /// Computes the sidebar list view model from the current state.
    ///
    /// Includes one item per filtered eatery (in filter order) and an empty
    /// state when the catalog is loaded but nothing is visible. Before the
    /// catalog load completes, `loading` is set instead of an empty state.
    #[must_use]
    pub fn sidebar_viewmodel(&self) -> SidebarViewModel {
        let items: Vec<EateryListItem> = self
            .filtered
            .iter()
            .map(|eatery| EateryListItem {
                id: eatery.id,
                name: eatery.name.clone(),
                city: eatery.city.clone(),
                category: eatery.category.clone(),
                is_selected: self.selected == Some(eatery.id),
            })
            .collect();

        let empty_state = if !self.catalog_loaded || !items.is_empty() {
            None
        } else if self.catalog.is_empty() {
            Some(EmptyState {
                message: "No eateries available".to_string(),
                subtitle: "Check back soon for new spots".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No eateries found".to_string(),
                subtitle: "Try a different search or category".to_string(),
            })
        };

        SidebarViewModel {
            open: self.sidebar_open,
            loading: !self.catalog_loaded,
            items,
            empty_state,
        }
    }

    /// Computes the detail overlay view model.
    ///
    /// Returns `None` unless the overlay is open and the selection resolves
    /// against the catalog. Media items keep catalog order; the reviews
    /// section is derived from the fetch state, with an explicit
    /// `Unavailable` affordance for eateries without an external place
    /// reference so the overlay never shows a perpetual spinner.
    #[must_use]
    pub fn overlay_viewmodel(&self) -> Option<OverlayViewModel> {
        if !self.overlay_open {
            return None;
        }
        let eatery = self.selected_eatery()?;

        Some(OverlayViewModel {
            eatery_id: eatery.id,
            name: eatery.name.clone(),
            description: eatery.description.clone(),
            city: eatery.city.clone(),
            category: eatery.category.clone(),
            media: eatery.media.clone(),
            structured_review: eatery.review.clone(),
            reviews: self.reviews_section(eatery),
        })
    }

    /// Derives the overlay's reviews section from the fetch state.
    ///
    /// Fetched reviews are additive: failure renders an error line inside the
    /// section while the rest of the overlay (media, structured review) is
    /// unaffected.
    fn reviews_section(&self, eatery: &Eatery) -> ReviewsSection {
        if eatery.place_id.is_none() {
            return ReviewsSection::Unavailable;
        }

        match &self.fetch_state {
            FetchState::Loading { eatery_id } if *eatery_id == eatery.id => {
                ReviewsSection::Loading
            }
            FetchState::Succeeded { eatery_id, reviews } if *eatery_id == eatery.id => {
                if reviews.is_empty() {
                    ReviewsSection::Empty
                } else {
                    ReviewsSection::Reviews(
                        reviews
                            .iter()
                            .map(|review| ReviewItem {
                                author_name: review.author_name.clone(),
                                rating: review.rating,
                                text: review.text.clone(),
                                time_ago: review.time_ago(),
                            })
                            .collect(),
                    )
                }
            }
            FetchState::Failed { eatery_id, message } if *eatery_id == eatery.id => {
                ReviewsSection::Error(message.clone())
            }
            // Fetch state belongs to a different eatery (or is idle): nothing
            // to show yet for this one.
            _ => ReviewsSection::Loading,
        }
    }
}
