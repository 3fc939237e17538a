//! Configuration schema definitions.
//!
//! Both types are plain values. They are built once by the loader and never
//! mutated afterwards, so a snapshot can sit behind an `Arc` and be read from
//! any task without locking.

use std::collections::HashMap;

use serde::Serialize;

/// A single upstream backend service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    /// Logical name, unique within the registry.
    pub name: String,

    /// Base URL of the upstream (e.g., "http://user-service:8081").
    pub url: String,
}

/// Root configuration for the gateway process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayConfig {
    /// Port the gateway listens on. Kept as a string; only ever handed to a
    /// listener bind.
    pub port: String,

    /// Upstream services keyed by logical name.
    pub services: HashMap<String, ServiceConfig>,
}

impl GatewayConfig {
    /// Look up a service by its logical name.
    pub fn service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.get(name)
    }

    /// Base URL for the named service.
    pub fn service_url(&self, name: &str) -> Option<&str> {
        self.service(name).map(|s| s.url.as_str())
    }
}
