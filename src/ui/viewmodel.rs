//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain no business logic, only display-ready data: the host shell maps
//! them 1:1 onto its widgets (sidebar list, detail overlay) without reaching
//! back into the state container.

use crate::domain::{EateryId, MediaRef, StructuredReview};

/// Sidebar list view model.
///
/// Contains one entry per eatery in the filtered view, in filter order, plus
/// the loading and empty states the sidebar can be in. `loading` and
/// `empty_state` are mutually exclusive: before the catalog load completes
/// only `loading` is set, afterwards an empty item list comes with an
/// explanatory empty state.
#[derive(Debug, Clone)]
pub struct SidebarViewModel {
    /// Whether the sidebar is expanded.
    pub open: bool,

    /// Whether the catalog load is still outstanding.
    pub loading: bool,

    /// List entries in filtered order.
    pub items: Vec<EateryListItem>,

    /// Message shown when the list is empty after loading.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single eatery list row.
#[derive(Debug, Clone)]
pub struct EateryListItem {
    /// Catalog id, used as the stable row key and click payload.
    pub id: EateryId,

    /// Display name.
    pub name: String,

    /// City line shown under the name.
    pub city: String,

    /// Category badge.
    pub category: String,

    /// Whether this row is the current selection.
    pub is_selected: bool,
}

/// Empty state message display information.
///
/// Shown when the list has nothing to display: catalog empty (or failed to
/// load) versus filter matched nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No eateries found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Detail overlay view model.
///
/// Present only while the overlay is open with a resolved selection. Media
/// items keep catalog order; the structured review is independent of the
/// fetched reviews section and renders whenever the record carries one.
#[derive(Debug, Clone)]
pub struct OverlayViewModel {
    /// Id of the eatery the overlay shows.
    pub eatery_id: EateryId,

    /// Display name.
    pub name: String,

    /// Long-form description.
    pub description: String,

    /// City line.
    pub city: String,

    /// Category badge.
    pub category: String,

    /// Gallery in catalog order; the kind decides static image versus
    /// playback-controls rendering.
    pub media: Vec<MediaRef>,

    /// The brand's own structured review, if present.
    pub structured_review: Option<StructuredReview>,

    /// Rendering state of the third-party reviews section.
    pub reviews: ReviewsSection,
}

/// Rendering state of the overlay's third-party reviews section.
///
/// Failures stay contained to this section: the rest of the overlay renders
/// regardless of what happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewsSection {
    /// The eatery has no external place reference; render an explicit
    /// "no reviews available" affordance, never a spinner.
    Unavailable,

    /// A fetch for this eatery is in flight; render a loading indicator.
    Loading,

    /// Reviews arrived, in the order the proxy returned them.
    Reviews(Vec<ReviewItem>),

    /// The fetch succeeded but the place has no reviews.
    Empty,

    /// The fetch failed; render the contained error message.
    Error(String),
}

/// Display information for a single fetched review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// Review author display name.
    pub author_name: String,

    /// Star rating from 1 to 5.
    pub rating: u8,

    /// Review body.
    pub text: String,

    /// Humanized relative timestamp (e.g. "3h ago").
    pub time_ago: String,
}
