//! In-process stand-in for a container daemon's HTTP control API.
//!
//! # Design
//! Serves a small container CRUD surface plus two introspection endpoints
//! over whatever listener the caller binds, which in this workspace is a
//! `tokio::net::UnixListener`. `/echo` reports exactly what the server
//! observed about the incoming request (method, declared content length,
//! headers, body), so transport tests can assert on the wire behavior of
//! the client under test without parsing raw sockets.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::UnixListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Container {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub running: bool,
}

#[derive(Deserialize)]
pub struct CreateContainer {
    pub name: String,
    pub image: String,
}

/// What the server observed about one incoming request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoReport {
    pub method: String,
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub body_len: usize,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Container>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/version", get(version))
        .route("/echo", any(echo))
        .route("/containers", get(list_containers).post(create_container))
        .route("/containers/{id}", get(get_container).delete(delete_container))
        .route("/containers/{id}/start", post(start_container))
        .with_state(db)
}

pub async fn run(listener: UnixListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "mock-daemon",
        "version": "0.1.0",
        "api_version": "1.0",
    }))
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<EchoReport> {
    let content_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok());
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let observed = headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();

    Json(EchoReport {
        method: method.to_string(),
        content_length,
        content_type,
        headers: observed,
        body: String::from_utf8_lossy(&body).into_owned(),
        body_len: body.len(),
    })
}

async fn list_containers(State(db): State<Db>) -> Json<Vec<Container>> {
    let containers = db.read().await;
    Json(containers.values().cloned().collect())
}

async fn create_container(
    State(db): State<Db>,
    Json(input): Json<CreateContainer>,
) -> (StatusCode, Json<Container>) {
    let container = Container {
        id: Uuid::new_v4(),
        name: input.name,
        image: input.image,
        running: false,
    };
    db.write().await.insert(container.id, container.clone());
    (StatusCode::CREATED, Json(container))
}

async fn get_container(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Container>, StatusCode> {
    let containers = db.read().await;
    containers.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

// The body extractor drains the request so zero-length chunked uploads
// complete without waiting out the client's 100-continue window.
async fn start_container(State(db): State<Db>, Path(id): Path<Uuid>, _body: Bytes) -> StatusCode {
    let mut containers = db.write().await;
    match containers.get_mut(&id) {
        Some(container) if container.running => StatusCode::NOT_MODIFIED,
        Some(container) => {
            container.running = true;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_container(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut containers = db.write().await;
    containers
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
