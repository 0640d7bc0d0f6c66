//! Eatery catalog sources.
//!
//! The catalog is loaded once at startup from a content API and held
//! in memory; this module defines the [`CatalogSource`] seam the fetch
//! worker drives plus the two implementations: an HTTP client for the
//! content service and a static in-memory source for embedded data and
//! tests.

pub mod normalize;

use crate::domain::{Eatery, EateryMapError, Result};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("eatery-map/", env!("CARGO_PKG_VERSION"));

/// Source of the eatery catalog.
///
/// Implementations are driven from the fetch worker thread, so they may
/// block. Errors are surfaced to the application core, which degrades to an
/// empty catalog rather than crashing.
pub trait CatalogSource: Send {
    /// Loads the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is unreachable or its response cannot
    /// be normalized into any records.
    fn load(&self) -> Result<Vec<Eatery>>;
}

/// In-memory catalog source for embedded datasets and tests.
pub struct StaticCatalog(pub Vec<Eatery>);

impl CatalogSource for StaticCatalog {
    fn load(&self) -> Result<Vec<Eatery>> {
        Ok(self.0.clone())
    }
}

/// HTTP catalog source backed by the content API.
///
/// Fetches the eatery collection endpoint and normalizes the enveloped
/// response via [`normalize::normalize_response`]. Transport failures and
/// non-success statuses map to [`EateryMapError::CatalogLoad`].
pub struct HttpCatalogSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Builds a catalog source for the given collection endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl CatalogSource for HttpCatalogSource {
    fn load(&self) -> Result<Vec<Eatery>> {
        let span = tracing::debug_span!("catalog_load", url = %self.url);
        let _guard = span.enter();

        let response = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()
            .map_err(|e| EateryMapError::CatalogLoad(e.to_string()))?;

        let body: serde_json::Value = response.json()?;
        let eateries = normalize::normalize_response(&body);

        tracing::debug!(count = eateries.len(), "catalog loaded");
        Ok(eateries)
    }
}
