//! Maintenance gate decision logic.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, scheme, host)
//!     → mode.rs (read MAINTENANCE_MODE from the bindings snapshot)
//!     → classify.rs (static asset / maintenance page / exempt page / other)
//!     → decision.rs (Redirect or Delegate)
//!     → origin.rs (normalized URL: path to classify, origin to redirect to)
//! ```
//!
//! # Design Decisions
//! - Everything in here is a pure function of (mode, path); no I/O
//! - Bindings are an immutable snapshot per request, swapped on reload
//! - Exempt paths and asset extensions are fixed constants, not config

pub mod classify;
pub mod decision;
pub mod mode;
pub mod origin;

pub use classify::{classify, PathClass, EXEMPT_PAGES, MAINTENANCE_PAGE, STATIC_ASSET_EXTENSIONS};
pub use decision::{decide, Disposition};
pub use mode::{GateEnv, MaintenanceMode, MAINTENANCE_MODE};
pub use origin::{GateTarget, Origin};
