//! Responses produced by the gate itself.
//!
//! Everything else the client sees comes from the asset store unchanged.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::gate::MAINTENANCE_PAGE;

/// `302 Found` to `location` with an empty body.
///
/// Locations built by `GateTarget` are an ASCII origin serialization plus a
/// constant path, so they are always valid header values. The relative
/// fallback only covers locations built some other way.
pub fn maintenance_redirect(location: &str) -> Response {
    let value = HeaderValue::from_str(location)
        .unwrap_or_else(|_| HeaderValue::from_static(MAINTENANCE_PAGE));
    (StatusCode::FOUND, [(header::LOCATION, value)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateTarget;

    #[tokio::test]
    async fn test_redirect_shape() {
        let res = maintenance_redirect("https://example.com/down/maintenance.html");
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "https://example.com/down/maintenance.html"
        );
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_target_locations_are_valid_headers() {
        for url in ["http://EXAMPLE.com:80/x", "https://bücher.example/x", "http://[::1]:8080/"] {
            let location = GateTarget::parse(url).maintenance_location();
            assert!(HeaderValue::from_str(&location).is_ok(), "{}", location);
            let res = maintenance_redirect(&location);
            assert_eq!(res.headers().get(header::LOCATION).unwrap(), location.as_str());
        }
    }

    #[test]
    fn test_invalid_location_falls_back() {
        let res = maintenance_redirect("http://bad\nhost/down/maintenance.html");
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), MAINTENANCE_PAGE);
    }
}
