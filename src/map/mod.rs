//! Map synchronization layer.
//!
//! Keeps the external mapping widget consistent with application state:
//! marker definitions derived from the filtered view (with stable ids and
//! coordinate validation), delta-based marker synchronization, and animated
//! viewport fly-to with last-writer-wins supersession.
//!
//! # Modules
//!
//! - [`markers`]: Marker definitions and id-keyed set diffing
//! - [`view`]: Widget trait seam and the [`view::MapView`] adapter

pub mod markers;
pub mod view;

pub use markers::{diff_markers, markers_for, MarkerDef, MarkerDiff};
pub use view::{Flight, MapView, MapWidget};
