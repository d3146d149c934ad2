//! Test doubles shared by the client and server tests.

use crate::config::GeminiConfig;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the fake completion service answers.
#[derive(Debug, Clone)]
pub enum Upstream {
    /// A well-formed envelope whose first candidate carries this text.
    Reply(String),
    /// An empty reply with this status code.
    Status(u16),
    /// This body verbatim, with a 200 status.
    Raw(String),
    /// Sleep this long before answering.
    Slow(Duration),
}

impl Upstream {
    pub fn reply(text: &str) -> Self {
        Upstream::Reply(text.to_string())
    }
}

/// A request the fake completion service received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

struct Shared {
    upstream: Upstream,
    requests: Mutex<Vec<Recorded>>,
}

/// Fake `generateContent` endpoint listening on an ephemeral port.
pub struct MockUpstream {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl MockUpstream {
    pub async fn start(upstream: Upstream) -> Self {
        let shared = Arc::new(Shared {
            upstream,
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(handle)
            .layer(DefaultBodyLimit::disable())
            .with_state(shared.clone());

        Self {
            addr: spawn(router).await,
            shared,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    shared.requests.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        api_key: header("x-goog-api-key"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });

    match &shared.upstream {
        Upstream::Reply(text) => Json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        }))
        .into_response(),
        Upstream::Status(code) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Upstream::Raw(raw) => raw.clone().into_response(),
        Upstream::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            StatusCode::OK.into_response()
        }
    }
}

/// Serve a router on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1beta")
}

pub fn test_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
        ..GeminiConfig::new("test-key")
    }
}
