//! Tracing initialization.
//!
//! Wires the `tracing` macros used throughout the crate to a formatted
//! subscriber. Observability is optional: initialization failures are logged
//! and swallowed, and repeated calls are harmless.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default level when neither config nor environment specify one.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the tracing subscriber.
///
/// Level resolution order:
/// 1. The `RUST_LOG` environment variable, if set
/// 2. `config.trace_level`, if set
/// 3. Default: `"info"`
///
/// Idempotent: only the first call installs a subscriber; later calls are
/// no-ops. Never panics — a host that already installed its own subscriber
/// simply wins.
///
/// # Example
///
/// ```rust
/// use eatery_map::observability::init_tracing;
/// use eatery_map::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let fallback = config
        .trace_level
        .as_deref()
        .unwrap_or(DEFAULT_TRACE_LEVEL);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if let Err(e) = result {
        // A subscriber is already installed; keep going without ours.
        eprintln!("tracing init skipped: {e}");
    }
}
