//! Eatery discovery and map synchronization core.
//!
//! `eatery-map` is the embeddable core of an eatery discovery surface: a
//! searchable, filterable catalog of eateries synchronized with an
//! interactive map, with on-demand external review retrieval. The host shell
//! (web view, native widget toolkit) owns rendering and input; this crate
//! owns all state and behavior behind it:
//!
//! - Stable substring/category filtering over an in-memory catalog
//! - Single-writer selection with an animated map fly-to per selection
//! - Id-keyed marker synchronization (retained markers never remount)
//! - On-demand review fetches with stale-response protection
//! - A detail overlay view model with media, structured review, and
//!   external review sections
//!
//! # Architecture
//!
//! The crate follows a unidirectional event/action flow:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shell (rendering, input, worker transport)    │
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and selection control             │
//! │  - Filtering                                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │ Action              │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Map Layer     │   │ View Models   │   │ Worker Layer  │
//! │ (map/)        │   │ (ui/)         │   │ (worker/)     │
//! │ - Marker diff │   │ - Sidebar     │   │ - Catalog load│
//! │ - Fly-to      │   │ - Overlay     │   │ - Review fetch│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Gateways (catalog/, reviews/)                      │
//! │  - Content-API client + response normalization      │
//! │  - Review proxy client                              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Eatery, reviews, errors)
//! - [`catalog`]: Catalog sources and content-API normalization
//! - [`reviews`]: External review proxy gateway
//! - [`map`]: Marker synchronization and viewport control
//! - [`worker`]: Background worker for network fetches
//! - [`ui`]: Display-ready view model types
//! - [`observability`]: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use eatery_map::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! // Catalog arrives via a worker response; events drive everything else.
//! let (changed, actions) = handle_event(&mut state, &Event::SearchChanged("cafe".to_string()))?;
//! assert!(changed);
//! assert!(actions.is_empty());
//! # Ok::<(), eatery_map::EateryMapError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Single-Writer Selection
//!
//! All selection paths (list click, marker click) converge on one routine in
//! the event handler; nothing else writes selection state. Reselecting the
//! already-open eatery is a no-op and never refetches reviews.
//!
//! ## Stale-Response Protection
//!
//! Review fetch state is tagged with the eatery id it belongs to. A worker
//! response whose id no longer matches the loading state is discarded, so
//! rapid selection changes can never display another eatery's reviews.
//!
//! ## Marker Identity
//!
//! Markers are keyed by eatery id and synchronized by delta. A filter edit
//! that keeps an eatery visible retains its marker instance instead of
//! remounting it.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod map;
pub mod reviews;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ALL_CATEGORIES};
pub use domain::{Coordinates, Eatery, EateryId, EateryMapError, Result};
pub use map::{MapView, MapWidget};

use serde::Deserialize;

/// Application configuration.
///
/// Loaded from a TOML file by the host, or constructed directly when
/// embedding. All fields have defaults, so a partial (or empty) file is
/// valid.
///
/// # Example
///
/// ```toml
/// # eatery-map.toml
/// catalog_url = "https://content.example.com/api/eateries?populate=deep"
/// reviews_proxy_url = "https://example.com/api"
/// initial_zoom = 6.0
/// selection_zoom = 13.0
/// fly_duration_ms = 1200
/// trace_level = "info"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content-API collection endpoint for the eatery catalog.
    ///
    /// When absent the worker serves an empty catalog, which keeps the
    /// application usable with data pushed in by other means.
    pub catalog_url: Option<String>,

    /// Base URL of the review proxy (the `/google-reviews` endpoint lives
    /// under it).
    pub reviews_proxy_url: String,

    /// Initial map center before any selection.
    pub map_center: Coordinates,

    /// Initial map zoom level.
    pub initial_zoom: f64,

    /// Fixed zoom level applied by every selection fly-to.
    pub selection_zoom: f64,

    /// Fixed fly-to animation duration in milliseconds.
    pub fly_duration_ms: u64,

    /// Trace level for the tracing subscriber (e.g. `"debug"`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: None,
            reviews_proxy_url: "http://localhost:3000/api".to_string(),
            map_center: Coordinates {
                lat: -15.3875,
                lon: 28.3228,
            },
            initial_zoom: 6.0,
            selection_zoom: 13.0,
            fly_duration_ms: 1200,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| EateryMapError::Config(e.to_string()))
    }
}

/// Creates the initial application state for a configuration.
///
/// The state starts with an unloaded catalog; the host should post
/// [`worker::WorkerMessage::LoadCatalog`] to the worker and feed the
/// response back as [`Event::WorkerResponse`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        catalog_url = ?config.catalog_url,
        initial_zoom = config.initial_zoom,
        "initializing application state"
    );
    AppState::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn default_config_matches_map_defaults() {
        let config = Config::default();
        assert_eq!(config.initial_zoom, 6.0);
        assert_eq!(config.selection_zoom, 13.0);
        assert_eq!(config.fly_duration_ms, 1200);
        assert!(config.catalog_url.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "catalog_url = \"https://content.example.com/api/eateries\"\nselection_zoom = 15.0"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config.catalog_url.as_deref(),
            Some("https://content.example.com/api/eateries")
        );
        assert_eq!(config.selection_zoom, 15.0);
        assert_eq!(config.fly_duration_ms, 1200);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(Config::from_file("/nonexistent/eatery-map.toml").is_err());
    }

    #[test]
    fn initialize_starts_with_unloaded_catalog() {
        let state = initialize(&Config::default());
        assert!(state.catalog.is_empty());
        assert!(!state.catalog_loaded);
        assert!(state.selected.is_none());
    }
}
