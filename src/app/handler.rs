//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and network worker responses, translating them into state changes and
//! action sequences. It is the single writer for selection state and the
//! single dispatch point for review fetches.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host shell or the network worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Filter**: `SearchChanged`, `CategorySelected`
//! - **Selection**: `EateryClicked` (sidebar), `MarkerClicked` (map)
//! - **Layout**: `CloseOverlay`, `ToggleSidebar`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! Both click events route through one private `select` path, so the map
//! never writes selection state directly and the "reselect while open is
//! fetch-free" rule holds regardless of which surface the click came from.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{EateryId, FetchState};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or network worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially
/// within a single event-processing turn, ensuring deterministic state
/// transitions; a later selection always wins over an earlier one's pending
/// fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the free-text search query (fired on every keystroke).
    SearchChanged(String),

    /// Replaces the category selection (`"All"` disables the filter).
    CategorySelected(String),

    /// Selects an eatery from the sidebar list.
    EateryClicked(EateryId),

    /// Selects an eatery from a map marker click.
    ///
    /// Markers forward clicks here instead of mutating selection state so
    /// the selection controller stays the single writer.
    MarkerClicked(EateryId),

    /// Closes the detail overlay.
    ///
    /// Clears only the overlay flag: the selected id and any cached fetch
    /// state persist, so reopening the same eatery is instantaneous and
    /// fetch-free.
    CloseOverlay,

    /// Toggles the list sidebar open or closed.
    ToggleSidebar,

    /// Wraps a response from the network worker.
    ///
    /// Catalog responses replace the catalog; review responses pass the
    /// stale-response guard before being applied.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the host.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI needs a re-render, and the side
/// effects to run in sequence. The vector is empty when the event requires no
/// side effects (e.g. a redundant reselection).
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature stable
/// for hosts that treat handler failures uniformly with worker failures.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(text) => {
            state.search_text.clone_from(text);
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::CategorySelected(category) => {
            state.category.clone_from(category);
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::EateryClicked(id) | Event::MarkerClicked(id) => Ok(select(state, *id)),
        Event::CloseOverlay => {
            tracing::debug!(selected = ?state.selected, "closing overlay");
            state.overlay_open = false;
            Ok((true, vec![]))
        }
        Event::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

/// Applies a selection from either the sidebar or a map marker.
///
/// Reselecting the currently selected eatery while its overlay is already
/// open is a no-op: no refetch, no fly-to, no render. Reselecting it with the
/// overlay closed reopens the overlay against the cached fetch state. A
/// changed selection opens the overlay, triggers a fly-to when the eatery has
/// valid coordinates, and resets the fetch state — to `Loading` plus a worker
/// fetch when the eatery carries an external place reference, to `Idle`
/// otherwise.
///
/// Selecting an id that does not resolve against the catalog is legal (a
/// still-mounted marker can outlive its record) and leaves state untouched.
fn select(state: &mut AppState, id: EateryId) -> (bool, Vec<Action>) {
    if state.selected == Some(id) {
        if state.overlay_open {
            tracing::debug!(eatery_id = id, "eatery already selected and open");
            return (false, vec![]);
        }
        tracing::debug!(eatery_id = id, "reopening overlay for cached selection");
        state.overlay_open = true;
        return (true, vec![]);
    }

    // Cheap Arc clone; releases the catalog borrow before state mutates.
    let Some(eatery) = state.eatery_by_id(id).cloned() else {
        tracing::warn!(eatery_id = id, "selection does not resolve against catalog");
        return (false, vec![]);
    };

    tracing::debug!(
        eatery_id = id,
        eatery_name = %eatery.name,
        has_place_id = eatery.place_id.is_some(),
        "eatery selected"
    );

    let mut actions = vec![];

    if let Some(target) = eatery.valid_coordinates() {
        actions.push(Action::FlyTo { eatery_id: id, target });
    }

    match &eatery.place_id {
        Some(place_id) => {
            actions.push(Action::PostToWorker(WorkerMessage::FetchReviews {
                eatery_id: id,
                place_id: place_id.clone(),
            }));
            state.fetch_state = FetchState::Loading { eatery_id: id };
        }
        None => {
            state.fetch_state = FetchState::Idle;
        }
    }

    state.selected = Some(id);
    state.overlay_open = true;

    (true, actions)
}

/// Applies a worker response to the application state.
///
/// Review responses are keyed by the eatery id the request was issued for:
/// a result that no longer matches the id in the current `Loading` state is
/// a stale response and is discarded, never applied to the new selection.
/// Catalog failures surface as an empty, loaded catalog so the sidebar shows
/// its empty state instead of crashing or spinning forever.
fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::CatalogLoaded { eateries } => {
            tracing::debug!(count = eateries.len(), "catalog loaded");
            state.set_catalog(eateries.clone());
            (true, vec![])
        }
        WorkerResponse::CatalogFailed { message } => {
            tracing::error!(error = %message, "catalog load failed");
            state.set_catalog(vec![]);
            (true, vec![])
        }
        WorkerResponse::ReviewsFetched { eatery_id, reviews } => {
            if !state.fetch_state.is_loading_for(*eatery_id) {
                tracing::debug!(eatery_id, "discarding stale review response");
                return (false, vec![]);
            }
            tracing::debug!(eatery_id, count = reviews.len(), "reviews fetched");
            state.fetch_state = FetchState::Succeeded {
                eatery_id: *eatery_id,
                reviews: reviews.clone(),
            };
            (true, vec![])
        }
        WorkerResponse::ReviewsFailed { eatery_id, message } => {
            if !state.fetch_state.is_loading_for(*eatery_id) {
                tracing::debug!(eatery_id, "discarding stale review failure");
                return (false, vec![]);
            }
            tracing::debug!(eatery_id, error = %message, "review fetch failed");
            state.fetch_state = FetchState::Failed {
                eatery_id: *eatery_id,
                message: message.clone(),
            };
            (true, vec![])
        }
    }
}
