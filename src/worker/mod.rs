//! Background worker for network fetches.
//!
//! This module implements the worker that performs all network I/O (catalog
//! loading, review fetches) off the main application thread. Messages are
//! processed one at a time in arrival order, so at most one review fetch is
//! ever in flight.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{WorkerMessage, WorkerResponse};
