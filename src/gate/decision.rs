//! Per-request disposition.

use std::fmt;

use crate::gate::classify::classify;
use crate::gate::mode::MaintenanceMode;

/// What the gate does with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Answer with a 302 to the maintenance page.
    Redirect,
    /// Hand the request, untouched, to the asset store.
    Delegate,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Redirect => f.write_str("redirect"),
            Disposition::Delegate => f.write_str("delegate"),
        }
    }
}

/// Decide what happens to a request for `path` under `mode`.
///
/// The path is only classified when maintenance mode is on.
pub fn decide(mode: MaintenanceMode, path: &str) -> Disposition {
    if !mode.is_enabled() {
        return Disposition::Delegate;
    }

    if classify(path).is_exempt() {
        Disposition::Delegate
    } else {
        Disposition::Redirect
    }
}
