//! Request URL reconstruction and redirect target.
//!
//! # Responsibilities
//! - Recover scheme and host of the original request
//! - Rebuild the absolute URL and normalize it the way browsers do
//! - Build the maintenance page URL on that same origin
//!
//! # Design Decisions
//! - Absolute request URIs (HTTP/2, proxies) win over headers
//! - Scheme falls back to `X-Forwarded-Proto`, then plain `http`
//! - Paths are classified after WHATWG normalization (dot segments resolved)
//! - Origins serialize with a lowercase host and no default port
//! - Without any host the redirect stays relative (still same-origin)

use axum::http::{header, HeaderMap, Uri};
use url::Url;

use crate::gate::classify::MAINTENANCE_PAGE;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Base used to normalize paths when the request carries no host.
const PLACEHOLDER_BASE: &str = "http://localhost/";

/// Scheme and authority of a request, as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    authority: String,
}

impl Origin {
    pub fn new(scheme: impl Into<String>, authority: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into().to_ascii_lowercase(),
            authority: authority.into(),
        }
    }

    /// Recover the origin from a request URI and its headers.
    ///
    /// Returns `None` when no host can be determined.
    pub fn from_parts(uri: &Uri, headers: &HeaderMap) -> Option<Self> {
        let authority = match uri.authority() {
            Some(authority) => authority.as_str().to_string(),
            None => headers
                .get(header::HOST)
                .and_then(|h| h.to_str().ok())
                .map(str::trim)
                .filter(|h| !h.is_empty())?
                .to_string(),
        };

        let scheme = match uri.scheme_str() {
            Some(scheme) => scheme.to_string(),
            None => forwarded_proto(headers).unwrap_or_else(|| "http".to_string()),
        };

        Some(Self::new(scheme, authority))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}

fn forwarded_proto(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(X_FORWARDED_PROTO)?.to_str().ok()?;
    // Multiple proxies append; the first hop is the client-facing one.
    let proto = value.split(',').next()?.trim().to_ascii_lowercase();
    match proto.as_str() {
        "http" | "https" => Some(proto),
        _ => None,
    }
}

/// Normalized path plus serialized origin of one request.
///
/// Both the live middleware and the `check` command go through this type,
/// so they always agree on the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateTarget {
    path: String,
    origin: Option<String>,
}

impl GateTarget {
    pub fn from_url(url: &Url) -> Self {
        let origin = url.origin();
        Self {
            path: url.path().to_string(),
            origin: origin.is_tuple().then(|| origin.ascii_serialization()),
        }
    }

    /// Rebuild the URL of an incoming request.
    pub fn from_request(uri: &Uri, headers: &HeaderMap) -> Self {
        let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

        Origin::from_parts(uri, headers)
            .and_then(|origin| Url::parse(&format!("{}{}", origin, path_and_query)).ok())
            .map(|url| Self::from_url(&url))
            .unwrap_or_else(|| Self::relative(path_and_query))
    }

    /// Parse an absolute URL (`https://host/path?q`) or a bare path (`/path`).
    pub fn parse(target: &str) -> Self {
        match Url::parse(target) {
            Ok(url) if url.origin().is_tuple() => Self::from_url(&url),
            _ => Self::relative(target),
        }
    }

    /// A target with no known origin; the path is still normalized.
    fn relative(path_and_query: &str) -> Self {
        let path = Url::parse(PLACEHOLDER_BASE)
            .and_then(|base| base.join(path_and_query))
            .map(|url| url.path().to_string())
            .unwrap_or_else(|_| {
                path_and_query
                    .split(['?', '#'])
                    .next()
                    .unwrap_or(path_and_query)
                    .to_string()
            });
        Self { path, origin: None }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Location of the maintenance page on this target's origin.
    pub fn maintenance_location(&self) -> String {
        match &self.origin {
            Some(origin) => format!("{}{}", origin, MAINTENANCE_PAGE),
            None => MAINTENANCE_PAGE.to_string(),
        }
    }
}
