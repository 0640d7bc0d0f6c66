//! External review retrieval.
//!
//! Reviews come from a server-side proxy in front of the places API; the
//! proxy keeps the API key off the client and exposes a single endpoint:
//! `GET {base}/google-reviews?placeId=...` returning `{ "reviews": [...] }`.
//! This module defines the [`ReviewsGateway`] seam the fetch worker drives
//! and its HTTP implementation.

use crate::domain::{EateryMapError, ExternalReview, Result};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("eatery-map/", env!("CARGO_PKG_VERSION"));

/// Gateway to the external review proxy.
///
/// Implementations are driven from the fetch worker thread, so they may
/// block. One fetch is in flight at a time; staleness is handled by the
/// application core, not here.
pub trait ReviewsGateway: Send {
    /// Fetches reviews for a place.
    ///
    /// An empty list is a valid result (the place exists but has no reviews).
    ///
    /// # Errors
    ///
    /// Returns an error when the proxy is unreachable, responds with a
    /// non-success status, or returns a body that cannot be parsed.
    fn fetch(&self, place_id: &str) -> Result<Vec<ExternalReview>>;
}

/// Response envelope of the review proxy.
#[derive(Debug, Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    reviews: Vec<ExternalReview>,
}

/// HTTP gateway to the review proxy endpoint.
pub struct HttpReviewsGateway {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpReviewsGateway {
    /// Builds a gateway for the given proxy base URL (e.g. `https://host/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl ReviewsGateway for HttpReviewsGateway {
    fn fetch(&self, place_id: &str) -> Result<Vec<ExternalReview>> {
        let span = tracing::debug_span!("review_fetch", place_id);
        let _guard = span.enter();

        let url = format!("{}/google-reviews", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("placeId", place_id)])
            .send()?
            .error_for_status()
            .map_err(|e| EateryMapError::ReviewFetch(e.to_string()))?;

        let parsed: ProxyResponse = response.json()?;

        tracing::debug!(count = parsed.reviews.len(), "reviews fetched");
        Ok(parsed.reviews)
    }
}
