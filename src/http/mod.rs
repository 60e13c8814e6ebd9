//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace span with request ID, timeout)
//!     → middleware/maintenance.rs (redirect or let through)
//!     → response.rs (302 to the maintenance page)
//!  or → asset store (response passed back verbatim)
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{make_request_span, request_id, X_REQUEST_ID};
pub use server::{AppState, GateServer};
