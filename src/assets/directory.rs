//! Local directory asset store.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use axum::{body::Body, http::Request, response::Response};
use futures_util::future::BoxFuture;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::assets::AssetStore;

/// Serves files under a root directory.
///
/// Missing files get `ServeDir`'s own 404.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    inner: ServeDir,
}

impl DirectoryStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        tracing::info!(root = ?root, "Serving assets from directory");
        Self {
            inner: ServeDir::new(&root),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for DirectoryStore {
    fn fetch(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        let service = self.inner.clone();
        Box::pin(async move {
            let result: Result<_, Infallible> = service.oneshot(request).await;
            match result {
                Ok(response) => response.map(Body::new),
                Err(never) => match never {},
            }
        })
    }
}
