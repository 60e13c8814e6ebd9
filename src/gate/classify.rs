//! Path classification.
//!
//! # Responsibilities
//! - Recognize static asset files by extension (case-insensitive)
//! - Recognize the maintenance page itself (exact match)
//! - Recognize explicitly exempt pages (exact match)
//!
//! # Design Decisions
//! - Operates on the raw path string, never on a request
//! - No regex: a single `rsplit_once('.')` plus a fixed table lookup
//! - Path matching is case-sensitive, extension matching is not

use std::fmt;

/// Canonical path of the maintenance notice.
pub const MAINTENANCE_PAGE: &str = "/down/maintenance.html";

/// Pages that stay reachable while maintenance mode is on.
pub const EXEMPT_PAGES: &[&str] = &["/privacy.html", "/terms.html"];

/// File extensions served straight from the asset store.
pub const STATIC_ASSET_EXTENSIONS: &[&str] = &[
    "css", "js", "gif", "jpg", "jpeg", "png", "svg", "ico", "woff", "woff2", "ttf", "eot", "mp4",
    "webm",
];

/// Category a request path falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Stylesheet, script, image, video or font file.
    StaticAsset,
    /// The maintenance page itself.
    MaintenancePage,
    /// A page on the exempt list.
    ExemptPage,
    /// None of the above.
    Other,
}

impl PathClass {
    /// Returns true if this class bypasses the maintenance redirect.
    pub fn is_exempt(self) -> bool {
        !matches!(self, PathClass::Other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathClass::StaticAsset => "static-asset",
            PathClass::MaintenancePage => "maintenance-page",
            PathClass::ExemptPage => "exempt-page",
            PathClass::Other => "other",
        }
    }
}

impl fmt::Display for PathClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a URL path.
pub fn classify(path: &str) -> PathClass {
    if is_static_asset(path) {
        PathClass::StaticAsset
    } else if path == MAINTENANCE_PAGE {
        PathClass::MaintenancePage
    } else if EXEMPT_PAGES.contains(&path) {
        PathClass::ExemptPage
    } else {
        PathClass::Other
    }
}

fn is_static_asset(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => STATIC_ASSET_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext)),
        None => false,
    }
}
