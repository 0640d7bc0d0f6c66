//! External review model and fetch state machine.
//!
//! This module defines [`ExternalReview`], the record produced by the review
//! fetcher, and [`FetchState`], the tagged state the subsystem keeps for the
//! one review fetch that can be relevant at a time. Reviews are transient:
//! they belong to the current selection and are invalidated when a different
//! eatery is selected.

use crate::domain::eatery::EateryId;
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A single third-party review fetched through the reviews proxy.
///
/// Field aliases accept both the proxy's upstream shape (`author_name`,
/// `time`) and the camel-cased variant (`authorName`, `timestampSeconds`), so
/// either proxy generation parses without a translation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReview {
    /// Display name of the review author.
    #[serde(alias = "authorName")]
    pub author_name: String,

    /// Star rating from 1 to 5.
    pub rating: u8,

    /// Free-text body of the review.
    #[serde(default)]
    pub text: String,

    /// Unix timestamp (seconds) the review was written.
    #[serde(default, alias = "time", alias = "timestampSeconds")]
    pub timestamp_seconds: i64,
}

impl ExternalReview {
    /// Returns a human-readable string describing how long ago the review was
    /// written.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.timestamp_seconds;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// State of the single outstanding (or settled) review fetch.
///
/// One instance exists for the whole subsystem, not one per eatery, because
/// only one selection is active at a time. Every non-idle variant carries the
/// id of the eatery the fetch was issued for; that id is the stale-response
/// guard key. When a worker response arrives for an id that no longer matches
/// the loading state, the response is discarded rather than applied to the
/// new selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchState {
    /// No fetch is relevant: nothing selected, or the selected eatery has no
    /// external place reference.
    Idle,

    /// A fetch for the given eatery is in flight.
    Loading {
        /// The eatery the outstanding request was issued for.
        eatery_id: EateryId,
    },

    /// The fetch completed; reviews are kept in the order the proxy returned
    /// them (the core never re-sorts).
    Succeeded {
        /// The eatery the reviews belong to.
        eatery_id: EateryId,
        /// Ordered reviews, possibly empty.
        reviews: Vec<ExternalReview>,
    },

    /// The fetch failed with a contained, displayable reason.
    Failed {
        /// The eatery the failed request was issued for.
        eatery_id: EateryId,
        /// Human-readable failure description.
        message: String,
    },
}

impl FetchState {
    /// Returns `true` if a fetch for the given eatery is currently in flight.
    #[must_use]
    pub fn is_loading_for(&self, id: EateryId) -> bool {
        matches!(self, Self::Loading { eatery_id } if *eatery_id == id)
    }

    /// Returns the eatery id this state refers to, if any.
    #[must_use]
    pub fn eatery_id(&self) -> Option<EateryId> {
        match self {
            Self::Idle => None,
            Self::Loading { eatery_id }
            | Self::Succeeded { eatery_id, .. }
            | Self::Failed { eatery_id, .. } => Some(*eatery_id),
        }
    }
}
