//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Honour `RUST_LOG`, falling back to a crate-scoped default filter
//! - Keep stdout free for program output

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "api_gateway=info";

/// Install the global subscriber. Call once, before loading configuration.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
