//! Origin server asset store.
//!
//! # Responsibilities
//! - Forward the request to a fixed origin (scheme + authority rewrite only)
//! - Stream the origin response back without buffering
//!
//! # Design Decisions
//! - Headers, method and body pass through untouched, including `Host`
//! - No retries: a failed request is answered with 502 Bad Gateway

use std::str::FromStr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{
        uri::{Authority, PathAndQuery, Scheme},
        Request, Uri,
    },
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::assets::{AssetError, AssetStore};

/// Forwards requests to an origin server over plain HTTP.
#[derive(Clone)]
pub struct UpstreamStore {
    authority: Authority,
    client: Client<HttpConnector, Body>,
}

impl UpstreamStore {
    /// Create a store for `address` (host:port).
    pub fn new(address: &str, connect_timeout: Duration) -> Result<Self, AssetError> {
        let authority = Authority::from_str(address)
            .map_err(|e| AssetError::InvalidUri(format!("{}: {}", address, e)))?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(connect_timeout));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        tracing::info!(origin = %authority, "Serving assets from upstream");
        Ok(Self { authority, client })
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    async fn forward(
        client: Client<HttpConnector, Body>,
        authority: Authority,
        request: Request<Body>,
    ) -> Result<Response, AssetError> {
        let (mut parts, body) = request.into_parts();

        let mut uri_parts = parts.uri.clone().into_parts();
        uri_parts.scheme = Some(Scheme::HTTP);
        uri_parts.authority = Some(authority);
        if uri_parts.path_and_query.is_none() {
            uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        parts.uri = Uri::from_parts(uri_parts).map_err(|e| AssetError::InvalidUri(e.to_string()))?;

        let response: Response<Incoming> = client.request(Request::from_parts(parts, body)).await?;
        Ok(response.map(Body::new))
    }
}

impl AssetStore for UpstreamStore {
    fn fetch(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        let client = self.client.clone();
        let authority = self.authority.clone();
        Box::pin(async move {
            let path = request.uri().path().to_string();
            match Self::forward(client, authority, request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(path = %path, error = %e, "Upstream error");
                    e.into_response()
                }
            }
        })
    }
}
