//! Maintenance mode flag and the bindings snapshot it is read from.

use std::collections::BTreeMap;
use std::fmt;

/// Name of the binding that switches maintenance mode on.
pub const MAINTENANCE_MODE: &str = "MAINTENANCE_MODE";

/// Whether requests are being diverted to the maintenance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaintenanceMode {
    Enabled,
    #[default]
    Disabled,
}

impl MaintenanceMode {
    /// Parse a binding value.
    ///
    /// Only the exact string `"true"` enables maintenance mode. Anything else,
    /// including a missing binding, leaves it disabled.
    pub fn from_binding(value: Option<&str>) -> Self {
        match value {
            Some("true") => MaintenanceMode::Enabled,
            _ => MaintenanceMode::Disabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == MaintenanceMode::Enabled
    }
}

impl fmt::Display for MaintenanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceMode::Enabled => f.write_str("enabled"),
            MaintenanceMode::Disabled => f.write_str("disabled"),
        }
    }
}

/// Immutable snapshot of the string bindings visible to the gate.
///
/// A new snapshot is built on every config reload; requests in flight keep
/// the one they loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateEnv {
    vars: BTreeMap<String, String>,
}

impl GateEnv {
    pub fn new(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Look up a binding by name.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn maintenance_mode(&self) -> MaintenanceMode {
        MaintenanceMode::from_binding(self.var(MAINTENANCE_MODE))
    }
}
