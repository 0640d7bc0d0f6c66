//! Map view: widget seam, marker synchronization, viewport control.
//!
//! The actual tile rendering lives in an external mapping library; this
//! module defines the [`MapWidget`] trait the core drives, and [`MapView`],
//! the adapter that keeps the widget's marker set in sync with the filtered
//! view and executes fly-to commands with last-writer-wins supersession.
//!
//! The widget instance is acquired per view and released on view
//! destruction: [`MapView`] clears its markers when dropped, so a torn-down
//! view never leaves orphaned markers on a shared widget (scoped
//! acquisition, not a process-wide singleton).

use crate::app::Action;
use crate::domain::{Coordinates, Eatery, EateryId};
use crate::map::markers::{self, MarkerDef};
use std::sync::Arc;
use std::time::Duration;

/// Abstraction over the external mapping widget.
///
/// Implementations bridge to whatever mapping library the host embeds. The
/// contract mirrors what such libraries expose: marker add/remove keyed by a
/// stable id, and an animated "fly to" viewport command. Marker clicks do not
/// flow through this trait — the host forwards them as
/// [`crate::app::Event::MarkerClicked`] so the selection controller stays the
/// single writer of selection state.
pub trait MapWidget {
    /// Places a marker on the map.
    fn add_marker(&mut self, marker: &MarkerDef);

    /// Removes the marker with the given id, if present.
    fn remove_marker(&mut self, id: EateryId);

    /// Starts an animated viewport transition to the target.
    ///
    /// A call issued while a previous transition is still animating replaces
    /// that transition's target.
    fn fly_to(&mut self, target: Coordinates, zoom: f64, duration: Duration);

    /// Removes all markers.
    fn clear_markers(&mut self);
}

/// An in-flight (or last completed) viewport transition target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    /// The eatery the flight targets.
    pub eatery_id: EateryId,

    /// Target position.
    pub target: Coordinates,
}

/// Adapter keeping an external mapping widget in sync with application state.
///
/// Owns the widget for its lifetime. `sync_markers` applies only the delta
/// between the previous and next filtered views, so retained markers keep
/// their identity; `execute` consumes handler actions, superseding any
/// pending flight on a new `FlyTo`. Selection clears never move the viewport
/// — the map stays where the user left it after closing a detail view.
pub struct MapView<W: MapWidget> {
    widget: W,
    markers: Vec<MarkerDef>,
    flight: Option<Flight>,
    selection_zoom: f64,
    fly_duration: Duration,
}

impl<W: MapWidget> MapView<W> {
    /// Acquires the widget and configures viewport behavior.
    ///
    /// # Parameters
    ///
    /// * `widget` - The mapping widget instance, owned until the view drops
    /// * `selection_zoom` - Fixed zoom level applied by every fly-to
    /// * `fly_duration` - Fixed animation duration for fly-to transitions
    pub fn new(widget: W, selection_zoom: f64, fly_duration: Duration) -> Self {
        Self {
            widget,
            markers: Vec::new(),
            flight: None,
            selection_zoom,
            fly_duration,
        }
    }

    /// Synchronizes the widget's markers with a filtered view.
    ///
    /// Computes the id-keyed delta against the currently mounted markers and
    /// applies only additions and removals. Eateries without valid
    /// coordinates are excluded upstream and never reach the widget.
    pub fn sync_markers(&mut self, filtered: &[Arc<Eatery>]) {
        let next = markers::markers_for(filtered);
        let diff = markers::diff_markers(&self.markers, &next);

        if diff.is_empty() {
            tracing::trace!(marker_count = next.len(), "marker set unchanged");
            self.markers = next;
            return;
        }

        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            retained = next.len() - diff.added.len(),
            "syncing markers"
        );

        for id in diff.removed {
            self.widget.remove_marker(id);
        }
        for marker in &diff.added {
            self.widget.add_marker(marker);
        }

        self.markers = next;
    }

    /// Executes a handler action relevant to the map.
    ///
    /// `FlyTo` starts an animated recenter at the configured zoom; a flight
    /// issued while another is pending supersedes it (last writer wins, no
    /// queueing). Other actions are not the map's concern and are ignored.
    pub fn execute(&mut self, action: &Action) {
        if let Action::FlyTo { eatery_id, target } = action {
            if let Some(previous) = self.flight.replace(Flight {
                eatery_id: *eatery_id,
                target: *target,
            }) {
                tracing::debug!(
                    superseded = previous.eatery_id,
                    current = eatery_id,
                    "superseding in-flight viewport transition"
                );
            }
            self.widget.fly_to(*target, self.selection_zoom, self.fly_duration);
        }
    }

    /// Currently mounted markers, in filter order.
    #[must_use]
    pub fn markers(&self) -> &[MarkerDef] {
        &self.markers
    }

    /// The most recent flight target, if any fly-to was issued.
    #[must_use]
    pub fn flight(&self) -> Option<&Flight> {
        self.flight.as_ref()
    }
}

impl<W: MapWidget> Drop for MapView<W> {
    /// Releases the widget's markers when the view is destroyed.
    fn drop(&mut self) {
        tracing::debug!(marker_count = self.markers.len(), "tearing down map view");
        self.widget.clear_markers();
    }
}
