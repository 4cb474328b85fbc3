#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use pkgsearch_bot::config::{Config, RegistryConfig};
use pkgsearch_bot::search::SearchResultRow;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Registry body with `Foo` (no icon) and `Bar` (with icon), in that order.
pub fn registry_body() -> String {
    json!({
        "totalHits": 2,
        "data": [
            {
                "id": "Foo",
                "version": "1.0",
                "description": "d",
                "projectUrl": "http://p"
            },
            {
                "id": "Bar",
                "version": "2.1.0-beta",
                "description": "bar package",
                "projectUrl": "http://bar",
                "iconUrl": "http://i"
            }
        ]
    })
    .to_string()
}

pub fn foo_row() -> SearchResultRow {
    SearchResultRow {
        name: "Foo".to_string(),
        version: "1.0".to_string(),
        description: "d".to_string(),
        project_url: "http://p".to_string(),
        icon_url: String::new(),
    }
}

pub fn bar_row() -> SearchResultRow {
    SearchResultRow {
        name: "Bar".to_string(),
        version: "2.1.0-beta".to_string(),
        description: "bar package".to_string(),
        project_url: "http://bar".to_string(),
        icon_url: "http://i".to_string(),
    }
}

pub fn registry_config(base_url: &str) -> RegistryConfig {
    RegistryConfig {
        base_url: base_url.to_string(),
        include_prerelease: true,
        timeout_secs: 5,
    }
}

pub fn test_config(registry_url: &str) -> Config {
    Config {
        registry: registry_config(registry_url),
        ..Config::default()
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Base URL on which nothing is listening
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

// ── Fake registry ───────────────────────────────────────────────────

#[derive(Clone)]
struct RegistryState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct FakeRegistry {
    pub base_url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeRegistry {
    /// Decoded query-string parameters of every request received so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn registry_query(
    State(state): State<RegistryState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(params);
    (
        state.status,
        [("Content-Type", "application/json")],
        state.body.clone(),
    )
}

pub async fn spawn_registry(status: StatusCode, body: String) -> FakeRegistry {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = RegistryState {
        status,
        body,
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/query", get(registry_query))
        .with_state(state);
    let addr = serve(app).await;

    FakeRegistry {
        base_url: format!("http://{}", addr),
        requests,
    }
}

/// Registry that answers with `registry_body()` only after `delay`
pub async fn spawn_slow_registry(delay: Duration) -> String {
    let app = Router::new().route(
        "/query",
        get(move || async move {
            tokio::time::sleep(delay).await;
            ([("Content-Type", "application/json")], registry_body())
        }),
    );
    format!("http://{}", serve(app).await)
}

// ── Fake connector ──────────────────────────────────────────────────

#[derive(Clone)]
struct ConnectorState {
    fail: bool,
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

pub struct FakeConnector {
    pub service_url: String,
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

impl FakeConnector {
    /// (request path, activity JSON) for every posted activity
    pub fn received(&self) -> Vec<(String, Value)> {
        self.received.lock().unwrap().clone()
    }
}

async fn connector_post(
    State(state): State<ConnectorState>,
    uri: Uri,
    Json(activity): Json<Value>,
) -> impl IntoResponse {
    if state.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})));
    }
    let mut received = state.received.lock().unwrap();
    received.push((uri.path().to_string(), activity));
    (StatusCode::OK, Json(json!({"id": format!("sent-{}", received.len())})))
}

pub async fn spawn_connector(fail: bool) -> FakeConnector {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ConnectorState {
        fail,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/v3/conversations/{conversation}/activities", post(connector_post))
        .route(
            "/v3/conversations/{conversation}/activities/{reply_to}",
            post(connector_post),
        )
        .with_state(state);
    let addr = serve(app).await;

    FakeConnector {
        service_url: format!("http://{}", addr),
        received,
    }
}

/// Connector that acknowledges posted activities only after `delay`
pub async fn spawn_slow_connector(delay: Duration) -> String {
    let app = Router::new().route(
        "/v3/conversations/{conversation}/activities/{reply_to}",
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({"id": "late"}))
        }),
    );
    format!("http://{}", serve(app).await)
}
