//! Actions representing side effects to be executed by the host shell.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! network events. Actions bridge pure state transformations and effectful
//! operations like moving the map viewport or posting a fetch request to the
//! network worker.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host executes
//! them in sequence.

use crate::domain::{Coordinates, EateryId};
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the host shell.
///
/// Actions are produced by the event handler and executed by the host. They
/// are the boundary between pure state transitions and effectful operations:
/// the handler never touches the network or the mapping widget directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a message to the network worker.
    ///
    /// Enables asynchronous operations (catalog load, review fetch) without
    /// blocking the event-processing turn.
    PostToWorker(WorkerMessage),

    /// Recenters the map viewport on an eatery with an animated transition.
    ///
    /// Emitted once per selection change to an eatery with valid coordinates.
    /// The map view resolves zoom level and animation duration from
    /// configuration; a later fly-to supersedes any still-animating one.
    FlyTo {
        /// The eatery the flight targets, for supersession bookkeeping.
        eatery_id: EateryId,
        /// Validated target position.
        target: Coordinates,
    },
}
