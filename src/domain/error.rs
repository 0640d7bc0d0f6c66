//! Error types for the eatery discovery core.
//!
//! This module defines the centralized error type [`EateryMapError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for eatery discovery operations.
///
/// This enum consolidates all error conditions that can occur in the core,
/// from catalog loading to review fetching and configuration issues. Variants
/// wrapping underlying errors from external crates use `#[from]` for automatic
/// conversion.
///
/// Failures are contained to the component that produced them: a
/// [`EateryMapError::ReviewFetch`] never prevents filtering or selection from
/// functioning, and a [`EateryMapError::CatalogLoad`] surfaces as an empty
/// catalog rather than a crash.
#[derive(Debug, Error)]
pub enum EateryMapError {
    /// Catalog fetch or parse failed.
    ///
    /// The host maps this to an empty catalog with a visible "no eateries"
    /// state. The string contains a description of what went wrong.
    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    /// Third-party review fetch failed.
    ///
    /// Covers non-success proxy statuses and malformed payloads. Surfaced only
    /// within the detail overlay's review section.
    #[error("Review fetch error: {0}")]
    ReviewFetch(String),

    /// HTTP transport failed.
    ///
    /// Wraps errors from the `reqwest` client: connection failures, timeouts,
    /// and non-success statuses raised via `error_for_status`.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, primarily
    /// configuration file reads.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Communication with the network worker failed.
    ///
    /// Occurs when the worker cannot be constructed or a message cannot be
    /// dispatched. The string contains details about the failure.
    #[error("Worker error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for eatery discovery operations.
///
/// This is a type alias for `std::result::Result<T, EateryMapError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, EateryMapError>;
