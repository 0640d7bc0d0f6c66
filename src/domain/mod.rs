//! Domain layer for the eatery discovery core.
//!
//! This module contains the core domain types and business rules, independent
//! of the host shell, the mapping widget, and the network layer. It follows
//! domain-driven design principles by keeping the records and their
//! invariants isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`eatery`]: Eatery record, media references, coordinate validation
//! - [`review`]: External review record and the fetch state machine

pub mod eatery;
pub mod error;
pub mod review;

pub use eatery::{Coordinates, Eatery, EateryId, MediaKind, MediaRef, StructuredReview};
pub use error::{EateryMapError, Result};
pub use review::{ExternalReview, FetchState};
