//! In-memory mock of the remote collection server.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A scripted failure returned in place of the next request's response.
#[derive(Debug, Clone)]
pub struct ScriptedFailure {
    pub status: u16,
    pub message: Option<String>,
}

#[derive(Clone)]
struct MockState {
    products: Arc<Mutex<Vec<Value>>>,
    failures: Arc<Mutex<VecDeque<ScriptedFailure>>>,
    hits: Arc<Mutex<u64>>,
}

/// Mock collection server speaking the `/produtos` wire format.
pub struct MockStore {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStore {
    /// Start a new mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            products: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            hits: Arc::new(Mutex::new(0)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/produtos", get(list_products).post(create_product))
            .route("/produtos/{id}", put(replace_product).delete(remove_product))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seed the collection with a record, returning its minted id.
    pub async fn seed(
        &self,
        nome: &str,
        descricao: &str,
        quantidade: Value,
        foto: Option<&str>,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let mut record = json!({
            "_id": id,
            "nome": nome,
            "descricao": descricao,
            "quantidade": quantidade,
        });
        if let Some(foto) = foto {
            record["foto"] = json!(foto);
        }
        self.state.products.lock().await.push(record);
        id
    }

    /// Fail the next request with the given status, optionally carrying a
    /// JSON `{message}` body.
    pub async fn fail_next(&self, status: u16, message: Option<&str>) {
        self.state.failures.lock().await.push_back(ScriptedFailure {
            status,
            message: message.map(String::from),
        });
    }

    /// Server-side view of the collection.
    pub async fn records(&self) -> Vec<Value> {
        self.state.products.lock().await.clone()
    }

    /// Number of requests handled so far.
    pub async fn request_count(&self) -> u64 {
        *self.state.hits.lock().await
    }
}

impl Drop for MockStore {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Pop a scripted failure, if one is queued.
async fn take_failure(state: &MockState) -> Option<Response> {
    *state.hits.lock().await += 1;
    let failure = state.failures.lock().await.pop_front()?;
    let status = StatusCode::from_u16(failure.status).unwrap();
    Some(match failure.message {
        Some(message) => (status, Json(json!({ "message": message }))).into_response(),
        None => status.into_response(),
    })
}

async fn list_products(State(state): State<MockState>) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    Json(state.products.lock().await.clone()).into_response()
}

async fn create_product(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    let mut record = body;
    record["_id"] = json!(uuid::Uuid::new_v4().to_string());
    state.products.lock().await.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn replace_product(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    let mut products = state.products.lock().await;
    match products.iter_mut().find(|p| p["_id"] == json!(id)) {
        Some(slot) => {
            let mut record = body;
            record["_id"] = json!(id);
            *slot = record.clone();
            Json(record).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "product not found" })),
        )
            .into_response(),
    }
}

async fn remove_product(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    if let Some(failure) = take_failure(&state).await {
        return failure;
    }
    let mut products = state.products.lock().await;
    let before = products.len();
    products.retain(|p| p["_id"] != json!(id));
    if products.len() == before {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "product not found" })),
        )
            .into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
