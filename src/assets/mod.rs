//! Asset stores: where delegated requests are answered.
//!
//! # Data Flow
//! ```text
//! Delegated request (unmodified)
//!     → directory.rs (files under a local root, via ServeDir)
//!  or → upstream.rs (forwarded to a fixed origin server)
//!     → Response returned verbatim to the client
//! ```
//!
//! # Design Decisions
//! - The gate never inspects or rewrites what a store returns
//! - Stores are selected once at startup from `[assets]`
//! - Store failures become plain HTTP errors inside the store

pub mod directory;
pub mod upstream;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::config::{AssetsConfig, GateConfig};

pub use directory::DirectoryStore;
pub use upstream::UpstreamStore;

/// Something that can answer a request for a static asset.
pub trait AssetStore: Send + Sync + 'static {
    /// Serve `request` and return the response to send back unchanged.
    fn fetch(&self, request: Request<Body>) -> BoxFuture<'static, Response>;
}

/// Errors raised while serving from an asset store.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Request to the origin failed before a response arrived.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    /// The forwarded URI could not be built.
    #[error("invalid upstream URI: {0}")]
    InvalidUri(String),
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
    }
}

/// Build the store selected in the config.
pub fn from_config(config: &GateConfig) -> Result<Arc<dyn AssetStore>, AssetError> {
    let store: Arc<dyn AssetStore> = match &config.assets {
        AssetsConfig::Directory { root } => Arc::new(DirectoryStore::new(root)),
        AssetsConfig::Upstream { address } => Arc::new(UpstreamStore::new(
            address,
            Duration::from_secs(config.timeouts.connect_secs),
        )?),
    };
    Ok(store)
}
