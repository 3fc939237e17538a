//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (or MapEnv in tests)
//!     → env.rs (EnvironmentReader lookup)
//!     → loader.rs (resolve each registry row, empty == unset)
//!     → GatewayConfig (immutable snapshot)
//!     → shared via Arc with whatever serves traffic
//! ```
//!
//! # Design Decisions
//! - Loading cannot fail; every value has a hardcoded fallback
//! - The service set is a table in registry.rs, not repeated code
//! - No validation of URLs or ports; downstream components own that
//! - No reload; a new snapshot would replace the old one wholesale

pub mod env;
pub mod loader;
pub mod registry;
pub mod schema;

pub use env::{EnvironmentReader, MapEnv, ProcessEnv};
pub use loader::{load_config, load_config_from, resolve_with_default};
pub use registry::{ServiceSpec, DEFAULT_PORT, PORT_ENV_VAR, SERVICE_REGISTRY};
pub use schema::{GatewayConfig, ServiceConfig};
