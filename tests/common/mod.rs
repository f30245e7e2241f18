#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;

use cybernet_chat::{config::Config, routes, state::AppState};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

/// A throwaway HTTP server answering one path with a canned status and body.
pub struct Stub {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    pub async fn spawn(path: &str, status: StatusCode, body: impl Into<String>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body: body.into(),
            hits: hits.clone(),
            seen: seen.clone(),
        };

        let app = Router::new()
            .route(path, post(canned_handler))
            .with_state(state);
        let addr = serve(app).await;

        Self {
            base_url: format!("http://{}", addr),
            hits,
            seen,
        }
    }

    /// Upstream chat-completion stub.
    pub async fn upstream(status: StatusCode, body: impl Into<String>) -> Self {
        Self::spawn("/api/v1/chat/completions", status, body).await
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }
}

async fn canned_handler(State(stub): State<StubState>, headers: HeaderMap, body: Bytes) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.seen.lock().unwrap().push(Recorded {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body,
    )
        .into_response()
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Runs the full listener router and returns the chat endpoint URL.
pub async fn spawn_proxy(config: Config) -> String {
    let app = routes::create_router("public").with_state(AppState::shared(config));
    let addr = serve(app).await;
    format!("http://{}{}", addr, routes::CHAT_PATH)
}

/// An address nothing is listening on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn upstream_reply(content: &str) -> String {
    serde_json::json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
        .to_string()
}

pub fn config_for(upstream: &Stub) -> Config {
    Config::default()
        .with_credential("test-key")
        .with_upstream_base_url(upstream.base_url.clone())
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
