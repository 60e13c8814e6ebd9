//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use maintenance_gate::assets::AssetStore;
use maintenance_gate::config::GateConfig;
use maintenance_gate::gate::MAINTENANCE_MODE;
use maintenance_gate::http::GateServer;

/// Request as it arrived at the asset store.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub uri: String,
    pub headers: HeaderMap,
}

/// Asset store that answers 200 and remembers what it was asked for.
#[derive(Clone, Default)]
pub struct RecordingStore {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl RecordingStore {
    /// Every request that reached the store.
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// Method and URI of every request that reached the store.
    pub fn seen(&self) -> Vec<(String, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.uri))
            .collect()
    }
}

/// The response `RecordingStore` hands back for every request.
pub fn stored_response() -> Response {
    (
        StatusCode::OK,
        [("x-served-by", "assets"), ("cache-control", "max-age=60")],
        "asset",
    )
        .into_response()
}

impl AssetStore for RecordingStore {
    fn fetch(&self, request: Request<Body>) -> BoxFuture<'static, Response> {
        self.seen.lock().unwrap().push(SeenRequest {
            method: request.method().to_string(),
            uri: request.uri().to_string(),
            headers: request.headers().clone(),
        });
        Box::pin(async move { stored_response() })
    }
}

/// Config with `MAINTENANCE_MODE` bound to `value` (unbound when `None`).
pub fn config_with_mode(value: Option<&str>) -> GateConfig {
    let mut config = GateConfig::default();
    if let Some(value) = value {
        config.vars.insert(MAINTENANCE_MODE.to_string(), value.to_string());
    }
    config
}

/// Gate in front of a recording store.
pub fn gate_with_mode(value: Option<&str>) -> (GateServer, RecordingStore) {
    let store = RecordingStore::default();
    let server = GateServer::with_store(config_with_mode(value), Arc::new(store.clone()));
    (server, store)
}

/// Start a mock origin on an ephemeral port.
///
/// Responds 200 with a body of `origin:<METHOD> <request-target> host=<Host>`.
pub async fn start_mock_origin() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);
                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }

                        let mut host = String::new();
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) | Err(_) => break,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => {
                                    if let Some((name, value)) = line.split_once(':') {
                                        if name.eq_ignore_ascii_case("host") {
                                            host = value.trim().to_string();
                                        }
                                    }
                                }
                            }
                        }

                        let mut parts = request_line.split_whitespace();
                        let method = parts.next().unwrap_or_default();
                        let target = parts.next().unwrap_or_default();
                        let body = format!("origin:{} {} host={}", method, target, host);
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Fresh directory under the system temp dir.
pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
