//! Worker implementation for background network fetches.
//!
//! The fetch worker runs on its own thread and performs all network I/O so
//! the main application loop never blocks: catalog loads at startup and
//! review fetches on selection. Messages are processed sequentially, which is
//! what guarantees at most one review fetch in flight at a time.

use crate::catalog::{CatalogSource, HttpCatalogSource, StaticCatalog};
use crate::domain::{EateryId, Result};
use crate::reviews::{HttpReviewsGateway, ReviewsGateway};
use crate::worker::{WorkerMessage, WorkerResponse};
use crate::Config;

/// Worker state holding the network gateways.
///
/// Processes one [`WorkerMessage`] at a time and produces exactly one
/// [`WorkerResponse`] per message. Failures become failure responses, never
/// panics; the application core decides how to degrade.
pub struct FetchWorker {
    catalog: Box<dyn CatalogSource>,
    reviews: Box<dyn ReviewsGateway>,
}

impl FetchWorker {
    /// Creates a worker from explicit gateway implementations.
    pub fn new(catalog: Box<dyn CatalogSource>, reviews: Box<dyn ReviewsGateway>) -> Self {
        Self { catalog, reviews }
    }

    /// Creates a worker wired to the HTTP gateways named by the configuration.
    ///
    /// Without a catalog URL the worker falls back to an empty static
    /// catalog, which keeps the application usable with embedded data pushed
    /// in by other means.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog: Box<dyn CatalogSource> = match &config.catalog_url {
            Some(url) => Box::new(HttpCatalogSource::new(url.clone())?),
            None => Box::new(StaticCatalog(Vec::new())),
        };
        let reviews = Box::new(HttpReviewsGateway::new(config.reviews_proxy_url.clone())?);

        Ok(Self::new(catalog, reviews))
    }

    /// Processes a single message and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_message");
        let _guard = span.enter();

        match message {
            WorkerMessage::LoadCatalog => self.handle_load_catalog(),
            WorkerMessage::FetchReviews { eatery_id, place_id } => {
                self.handle_fetch_reviews(eatery_id, &place_id)
            }
        }
    }

    /// Helper for handling network operation results with consistent logging.
    fn handle_net_result<T, F>(
        operation: &str,
        result: Result<T>,
        on_success: F,
        on_failure: impl FnOnce(String) -> WorkerResponse,
    ) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "network operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, "network operation failed");
                on_failure(format!("{operation}: {e}"))
            }
        }
    }

    /// Handles the `LoadCatalog` message.
    fn handle_load_catalog(&mut self) -> WorkerResponse {
        Self::handle_net_result(
            "load catalog",
            self.catalog.load(),
            |eateries| {
                tracing::debug!(eatery_count = eateries.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { eateries }
            },
            |message| WorkerResponse::CatalogFailed { message },
        )
    }

    /// Handles the `FetchReviews` message.
    fn handle_fetch_reviews(&mut self, eatery_id: EateryId, place_id: &str) -> WorkerResponse {
        Self::handle_net_result(
            "fetch reviews",
            self.reviews.fetch(place_id),
            |reviews| {
                tracing::debug!(eatery_id, review_count = reviews.len(), "reviews fetched");
                WorkerResponse::ReviewsFetched { eatery_id, reviews }
            },
            |message| WorkerResponse::ReviewsFailed { eatery_id, message },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Eatery, EateryMapError, ExternalReview};

    struct FailingCatalog;

    impl CatalogSource for FailingCatalog {
        fn load(&self) -> Result<Vec<Eatery>> {
            Err(EateryMapError::CatalogLoad("connection refused".to_string()))
        }
    }

    struct FakeReviews {
        result: std::result::Result<Vec<ExternalReview>, String>,
    }

    impl ReviewsGateway for FakeReviews {
        fn fetch(&self, _place_id: &str) -> Result<Vec<ExternalReview>> {
            self.result
                .clone()
                .map_err(EateryMapError::ReviewFetch)
        }
    }

    fn eatery(id: EateryId) -> Eatery {
        Eatery {
            id,
            name: format!("Eatery {id}"),
            description: String::new(),
            city: "Lusaka".to_string(),
            category: "Cafe".to_string(),
            latitude: Some(-15.4),
            longitude: Some(28.3),
            media: vec![],
            review: None,
            place_id: Some("ChIJabc".to_string()),
        }
    }

    #[test]
    fn catalog_load_produces_loaded_response() {
        let mut worker = FetchWorker::new(
            Box::new(StaticCatalog(vec![eatery(1), eatery(2)])),
            Box::new(FakeReviews { result: Ok(vec![]) }),
        );

        match worker.handle_message(WorkerMessage::LoadCatalog) {
            WorkerResponse::CatalogLoaded { eateries } => assert_eq!(eateries.len(), 2),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn catalog_failure_becomes_failure_response() {
        let mut worker = FetchWorker::new(
            Box::new(FailingCatalog),
            Box::new(FakeReviews { result: Ok(vec![]) }),
        );

        match worker.handle_message(WorkerMessage::LoadCatalog) {
            WorkerResponse::CatalogFailed { message } => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn review_fetch_carries_the_eatery_id_back() {
        let review = ExternalReview {
            author_name: "Chipo".to_string(),
            rating: 5,
            text: "Great".to_string(),
            timestamp_seconds: 1_700_000_000,
        };
        let mut worker = FetchWorker::new(
            Box::new(StaticCatalog(vec![])),
            Box::new(FakeReviews { result: Ok(vec![review]) }),
        );

        let response = worker.handle_message(WorkerMessage::FetchReviews {
            eatery_id: 7,
            place_id: "ChIJabc".to_string(),
        });

        match response {
            WorkerResponse::ReviewsFetched { eatery_id, reviews } => {
                assert_eq!(eatery_id, 7);
                assert_eq!(reviews.len(), 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn review_failure_carries_the_eatery_id_back() {
        let mut worker = FetchWorker::new(
            Box::new(StaticCatalog(vec![])),
            Box::new(FakeReviews {
                result: Err("proxy returned 502".to_string()),
            }),
        );

        let response = worker.handle_message(WorkerMessage::FetchReviews {
            eatery_id: 7,
            place_id: "ChIJabc".to_string(),
        });

        match response {
            WorkerResponse::ReviewsFailed { eatery_id, message } => {
                assert_eq!(eatery_id, 7);
                assert!(message.contains("proxy returned 502"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
