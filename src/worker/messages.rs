//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! application thread and the background fetch worker that performs all
//! network I/O. Messages are serializable so the protocol survives being
//! carried over a host message channel rather than an in-process queue.

use crate::domain::{Eatery, EateryId, ExternalReview};
use serde::{Deserialize, Serialize};

/// Messages sent from the application core to the fetch worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the full eatery catalog from the content source.
    LoadCatalog,

    /// Fetch external reviews for the given eatery.
    ///
    /// Carries the eatery id so the response can be matched against the
    /// current fetch state; a response for an eatery that is no longer being
    /// loaded is discarded as stale.
    FetchReviews {
        /// Eatery the fetch belongs to.
        eatery_id: EateryId,

        /// External place identifier passed to the review proxy.
        place_id: String,
    },
}

/// Responses sent from the fetch worker back to the application core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Catalog loaded successfully (possibly with zero records).
    CatalogLoaded {
        /// Normalized eatery records.
        eateries: Vec<Eatery>,
    },

    /// Catalog could not be loaded; the core degrades to an empty catalog.
    CatalogFailed {
        /// Human-readable failure description.
        message: String,
    },

    /// Reviews fetched for an eatery (possibly zero reviews).
    ReviewsFetched {
        /// Eatery the reviews belong to.
        eatery_id: EateryId,

        /// Reviews in the order the proxy returned them.
        reviews: Vec<ExternalReview>,
    },

    /// Review fetch failed for an eatery.
    ReviewsFailed {
        /// Eatery the failed fetch belongs to.
        eatery_id: EateryId,

        /// Human-readable failure description.
        message: String,
    },
}
