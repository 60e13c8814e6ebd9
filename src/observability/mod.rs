//! Observability subsystem.
//!
//! Structured logging through `tracing`; every request span carries the
//! `x-request-id` assigned at the edge of the router.

pub mod logging;

pub use logging::init_logging;
