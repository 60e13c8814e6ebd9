//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse, apply MAINTENANCE_MODE env override)
//!     → validation.rs (semantic checks)
//!     → GateConfig (validated, immutable)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → sent to the server, which swaps its bindings snapshot
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a reload produces a new value
//! - All fields have defaults so an empty file is a valid config
//! - Only `[vars]` take effect on reload; listener and assets need a restart

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AssetsConfig, GateConfig, ListenerConfig, LogFormat, ObservabilityConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
