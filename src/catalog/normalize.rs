//! Content-API response normalization.
//!
//! The content service returns eatery records nested under an `attributes`
//! wrapper, with media collections wrapped another level deep. This module is
//! the single place that knows about those shapes: it flattens whatever
//! arrives into plain [`Eatery`] records so the rest of the core never
//! reasons about source-shape variance. Malformed or partial records are
//! tolerated by omission — a record missing its id or name is skipped, a
//! record missing coordinates or media is kept without them — and a single
//! bad record never fails the whole load.

use crate::domain::{Eatery, MediaKind, MediaRef, StructuredReview};
use serde_json::Value;

/// Normalizes a full content-API response body into eatery records.
///
/// Accepts either the enveloped form `{ "data": [ ... ] }` or a bare array.
/// Records that cannot be normalized are dropped with a log line.
#[must_use]
pub fn normalize_response(body: &Value) -> Vec<Eatery> {
    let records = body
        .get("data")
        .and_then(Value::as_array)
        .or_else(|| body.as_array());

    let Some(records) = records else {
        tracing::warn!("catalog response has no data array");
        return Vec::new();
    };

    let eateries: Vec<Eatery> = records.iter().filter_map(normalize_record).collect();

    tracing::debug!(
        received = records.len(),
        normalized = eateries.len(),
        "catalog response normalized"
    );

    eateries
}

/// Normalizes a single record, flattening the `attributes` wrapper if
/// present.
///
/// Returns `None` when the record lacks an id or a non-empty name; everything
/// else is optional.
fn normalize_record(record: &Value) -> Option<Eatery> {
    let id = record.get("id").and_then(Value::as_i64)?;

    // Strapi-style records nest everything under "attributes"; already-flat
    // records are accepted as-is.
    let attrs = record.get("attributes").unwrap_or(record);

    let name = attrs.get("name").and_then(Value::as_str).unwrap_or("");
    if name.is_empty() {
        tracing::debug!(record_id = id, "skipping record without a name");
        return None;
    }

    let mut media = media_from_wrapper(attrs.get("images"), MediaKind::Image);
    media.extend(media_from_wrapper(attrs.get("videos"), MediaKind::Video));
    media.extend(media_from_flat_list(attrs.get("media")));

    Some(Eatery {
        id,
        name: name.to_string(),
        description: string_field(attrs, "description"),
        city: string_field(attrs, "city"),
        category: string_field(attrs, "category"),
        latitude: attrs.get("latitude").and_then(Value::as_f64),
        longitude: attrs.get("longitude").and_then(Value::as_f64),
        media,
        review: attrs.get("review").and_then(structured_review),
        place_id: attrs
            .get("placeId")
            .or_else(|| attrs.get("place_id"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string),
    })
}

/// Extracts a string field, defaulting to empty when missing.
fn string_field(attrs: &Value, key: &str) -> String {
    attrs
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Flattens a wrapped media collection: `{ "data": [ { "attributes":
/// { "url": ... } } ] }`.
fn media_from_wrapper(collection: Option<&Value>, kind: MediaKind) -> Vec<MediaRef> {
    collection
        .and_then(|c| c.get("data"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            entry
                .get("attributes")
                .and_then(|a| a.get("url"))
                .and_then(Value::as_str)
                .map(|url| MediaRef { url: url.to_string(), kind })
        })
        .collect()
}

/// Accepts an already-flat media list: `[ { "url": ..., "kind": "video" } ]`.
fn media_from_flat_list(list: Option<&Value>) -> Vec<MediaRef> {
    list.and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|entry| serde_json::from_value::<MediaRef>(entry.clone()).ok())
        .collect()
}

/// Parses the structured review sub-object, if all its fields are usable.
fn structured_review(value: &Value) -> Option<StructuredReview> {
    serde_json::from_value(value.clone()).ok()
}
