//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the maintenance gate in front of the asset store
//! - Wire up middleware (trace span carrying the request ID, timeout)
//! - Bind server to listener
//! - Apply config reloads to the bindings snapshot
//! - Stop on the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::assets::{self, AssetError, AssetStore};
use crate::config::GateConfig;
use crate::gate::GateEnv;
use crate::http::middleware::maintenance_gate;
use crate::http::request::make_request_span;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current bindings snapshot, replaced wholesale on reload.
    pub inner: Arc<ArcSwap<GateEnv>>,
    pub assets: Arc<dyn AssetStore>,
}

impl AppState {
    pub fn new(env: GateEnv, assets: Arc<dyn AssetStore>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(env)),
            assets,
        }
    }
}

/// HTTP server for the maintenance gate.
pub struct GateServer {
    router: Router,
    config: GateConfig,
    state: AppState,
}

impl GateServer {
    /// Create a server whose asset store is selected by `config.assets`.
    pub fn new(config: GateConfig) -> Result<Self, AssetError> {
        let assets = assets::from_config(&config)?;
        Ok(Self::with_store(config, assets))
    }

    /// Create a server in front of an explicit asset store.
    pub fn with_store(config: GateConfig, assets: Arc<dyn AssetStore>) -> Self {
        let state = AppState::new(config.env(), assets);
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GateConfig, state: AppState) -> Router {
        Router::new()
            .fallback(delegate_to_assets)
            .layer(middleware::from_fn_with_state(state.clone(), maintenance_gate))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
    }

    /// The fully layered router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Config updates arriving on `config_updates` replace the bindings
    /// snapshot. The server drains and returns once `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<GateConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            maintenance_mode = %self.state.inner.load().maintenance_mode(),
            "HTTP server starting"
        );

        let inner = self.state.inner.clone();
        let startup_config = self.config.clone();
        let reloader = tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                apply_config_update(&inner, &startup_config, &new_config);
            }
        });

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Swap in the bindings of a reloaded config.
///
/// Listener and asset store settings are fixed at startup; changes to them
/// are reported and otherwise ignored.
pub fn apply_config_update(inner: &ArcSwap<GateEnv>, startup: &GateConfig, new_config: &GateConfig) {
    if new_config.listener != startup.listener || new_config.assets != startup.assets {
        tracing::warn!("Listener or asset store changed on disk; restart to apply");
    }

    let previous = inner.swap(Arc::new(new_config.env()));
    let old_mode = previous.maintenance_mode();
    let new_mode = inner.load().maintenance_mode();

    if old_mode != new_mode {
        tracing::info!(from = %old_mode, to = %new_mode, "Maintenance mode changed");
    } else {
        tracing::debug!(maintenance_mode = %new_mode, "Bindings reloaded");
    }
}

/// Fallback handler: everything the gate lets through goes to the asset store.
async fn delegate_to_assets(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.assets.fetch(request).await
}
