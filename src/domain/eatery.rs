//! Eatery domain model and coordinate validation.
//!
//! This module defines the core [`Eatery`] record together with its media
//! references and the optional structured editorial review. Eatery records are
//! created once when the catalog loads and are never mutated afterwards; the
//! application shares them by reference (`Arc<Eatery>`) across the filter
//! engine, the map view, and the selection controller.

use serde::{Deserialize, Serialize};

/// Unique identifier of an eatery within the catalog.
pub type EateryId = i64;

/// A validated geographic position.
///
/// Wraps a latitude/longitude pair that is known to be within range. Obtain
/// one via [`Coordinates::new`] or [`Eatery::valid_coordinates`]; records with
/// missing or out-of-range coordinates simply never produce one, which is how
/// they are excluded from map rendering without failing the catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, within [-90, 90].
    pub lat: f64,

    /// Longitude in degrees, within [-180, 180].
    pub lon: f64,
}

impl Coordinates {
    /// Creates coordinates if the pair is within geographic range.
    ///
    /// Returns `None` for out-of-range or non-finite values.
    ///
    /// # Examples
    ///
    /// ```
    /// use eatery_map::domain::Coordinates;
    ///
    /// assert!(Coordinates::new(-13.13, 27.85).is_some());
    /// assert!(Coordinates::new(999.0, 27.85).is_none());
    /// ```
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Some(Self { lat, lon })
        } else {
            None
        }
    }
}

/// Kind of a media reference attached to an eatery.
///
/// The detail overlay renders `Video` items with playback controls and
/// `Image` items as static images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A static image.
    Image,
    /// A video with playback controls.
    Video,
}

/// A single media reference in an eatery's gallery.
///
/// Media items keep the order the catalog supplied them in; the overlay
/// renders them in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Absolute or site-relative URL of the asset.
    pub url: String,

    /// Whether the asset is an image or a video.
    pub kind: MediaKind,
}

/// The brand's own structured review of an eatery.
///
/// All fields are free text written by the editorial team. The structured
/// review is independent of externally fetched reviews and renders even when
/// the review fetch fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReview {
    /// Verdict on the food itself.
    pub food: String,

    /// Verdict on the service.
    pub service: String,

    /// Verdict on pricing and value.
    pub pricing: String,

    /// Anything beyond the usual categories (ambience, parking, ...).
    pub extras: String,

    /// The closing summary line.
    #[serde(rename = "final")]
    pub final_verdict: String,
}

/// A curated eatery record.
///
/// Records are immutable for the session: the catalog creates them once (from
/// a static list or a one-shot content-API fetch) and every component reads
/// them through shared references. Coordinates are optional because partial
/// records must be tolerated; such eateries stay searchable and listable but
/// never reach the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eatery {
    /// Catalog-unique identifier.
    pub id: EateryId,

    /// Display name, non-empty.
    pub name: String,

    /// Longer free-text description.
    pub description: String,

    /// City the eatery is located in.
    pub city: String,

    /// Category used for filter grouping (e.g. "Cafe", "Restaurant").
    pub category: String,

    /// Latitude in degrees, if the record carried one.
    pub latitude: Option<f64>,

    /// Longitude in degrees, if the record carried one.
    pub longitude: Option<f64>,

    /// Ordered gallery of media references.
    #[serde(default)]
    pub media: Vec<MediaRef>,

    /// The brand's structured review, if one was written.
    #[serde(default)]
    pub review: Option<StructuredReview>,

    /// External place reference used to look up third-party reviews.
    ///
    /// `None` means the eatery has no external listing; selecting it leaves
    /// the review fetch state at `Idle` and the overlay shows an explicit
    /// "no reviews available" affordance.
    #[serde(default)]
    pub place_id: Option<String>,
}

impl Eatery {
    /// Returns the eatery's position if both coordinates are present and in
    /// geographic range.
    ///
    /// This is the single gate deciding marker eligibility: an eatery with
    /// `lat = 999.0` produces no marker but still appears in list rendering
    /// and search results.
    #[must_use]
    pub fn valid_coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eatery(lat: Option<f64>, lon: Option<f64>) -> Eatery {
        Eatery {
            id: 1,
            name: "Little Bird".to_string(),
            description: String::new(),
            city: "Lusaka".to_string(),
            category: "Cafe".to_string(),
            latitude: lat,
            longitude: lon,
            media: vec![],
            review: None,
            place_id: None,
        }
    }

    #[test]
    fn in_range_coordinates_are_valid() {
        let coords = eatery(Some(-13.13), Some(27.85)).valid_coordinates();
        assert_eq!(coords, Some(Coordinates { lat: -13.13, lon: 27.85 }));
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        assert!(eatery(Some(999.0), Some(27.85)).valid_coordinates().is_none());
    }

    #[test]
    fn missing_coordinates_are_rejected() {
        assert!(eatery(None, Some(27.85)).valid_coordinates().is_none());
        assert!(eatery(Some(-13.13), None).valid_coordinates().is_none());
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert!(eatery(Some(f64::NAN), Some(27.85)).valid_coordinates().is_none());
    }

    #[test]
    fn structured_review_final_field_round_trips() {
        let json = r#"{"food":"a","service":"b","pricing":"c","extras":"d","final":"e"}"#;
        let review: StructuredReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.final_verdict, "e");
    }
}
