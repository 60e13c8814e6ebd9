//! Maintenance gate: an edge request handler that either redirects traffic
//! to a maintenance page or hands it to a static asset store.

pub mod assets;
pub mod check;
pub mod config;
pub mod gate;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::GateConfig;
pub use http::GateServer;
pub use lifecycle::Shutdown;
