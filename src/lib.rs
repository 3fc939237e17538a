//! API gateway startup configuration.
//!
//! Resolves the listen port and the upstream service registry from the
//! environment, with a hardcoded fallback for every value. Serving traffic
//! is left to whatever consumes the resulting [`GatewayConfig`].

pub mod config;
pub mod observability;

pub use config::{load_config, load_config_from, GatewayConfig, ServiceConfig};
