//! Maintenance mode middleware.
//! Diverts non-exempt requests to the maintenance page while the flag is on.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::gate::{classify, decide, Disposition, GateTarget};
use crate::http::response::maintenance_redirect;
use crate::http::server::AppState;

pub async fn maintenance_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // 1. Read the flag from this request's bindings snapshot.
    let mode = state.inner.load().maintenance_mode();

    // 2. Parse the request URL the way a browser would, then decide on its path.
    let target = GateTarget::from_request(req.uri(), req.headers());
    match decide(mode, target.path()) {
        Disposition::Delegate => next.run(req).await,
        Disposition::Redirect => {
            // 3. Redirect on the request's own origin.
            let location = target.maintenance_location();
            tracing::debug!(
                method = %req.method(),
                path = %target.path(),
                class = %classify(target.path()),
                location = %location,
                "Maintenance redirect"
            );
            maintenance_redirect(&location)
        }
    }
}
