//! Observability subsystem.
//!
//! Only structured logging lives here. The config loader and the CLI emit
//! `tracing` events; `logging.rs` decides where they go.

pub mod logging;

pub use logging::init_logging;
