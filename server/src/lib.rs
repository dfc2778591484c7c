use anyhow::Result;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokendex_core::{DocId, DocumentStore, Engine, EngineError, StoreConfig, Token};
use tokio::task::{spawn_blocking, JoinError};
use tower_http::trace::TraceLayer;

/// One engine shared by every request. Queries take the read lock; indexing
/// takes the write lock for the whole document, persistence included.
pub type SharedEngine = Arc<RwLock<Engine<Box<dyn DocumentStore>>>>;

#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
}

#[derive(Deserialize)]
pub struct QueryParams {
    pub q: String,
}

#[derive(Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
    pub ids: Vec<DocId>,
    pub total_hits: usize,
    pub took_s: f64,
}

#[derive(Serialize, Deserialize)]
pub struct IndexRequest {
    pub id: DocId,
    pub tokens: Vec<Token>,
}

#[derive(Serialize, Deserialize)]
pub struct IndexResponse {
    pub id: DocId,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// Failure of a request, rendered as a status and a JSON body.
pub enum ApiError {
    Engine(EngineError),
    /// The request could not be decoded into the handler's input.
    Rejected { kind: &'static str, message: String },
    /// The blocking task running the engine call did not complete.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self { ApiError::Engine(err) }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected { kind: "validation", message: rejection.body_text() }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected { kind: "parse", message: rejection.body_text() }
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self { ApiError::Internal(err.to_string()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Engine(err) => {
                let status = match err {
                    EngineError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    EngineError::InvalidCommand | EngineError::Validation(_) | EngineError::Parse(_) => {
                        StatusCode::BAD_REQUEST
                    }
                };
                (status, ErrorBody { error: err.kind(), message: err.to_string() })
            }
            ApiError::Rejected { kind, message } => (StatusCode::BAD_REQUEST, ErrorBody { error: kind, message }),
            ApiError::Internal(message) => {
                tracing::error!(%message, "engine task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody { error: "internal", message })
            }
        };
        (status, Json(body)).into_response()
    }
}

pub fn build_app(store: StoreConfig) -> Result<Router> {
    let engine = Engine::new(store.open()?);
    Ok(router(Arc::new(RwLock::new(engine))))
}

pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/query", get(query_handler))
        .route("/index", post(index_handler))
        .with_state(AppState { engine })
        .layer(TraceLayer::new_for_http())
}

// Engine calls take a parking_lot lock and may write files, so they run on
// the blocking pool rather than on an async worker.

pub async fn query_handler(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let Query(params) = params?;
    let start = std::time::Instant::now();
    let engine = state.engine.clone();
    let q = params.q.clone();
    let ids = spawn_blocking(move || engine.read().query(&q)).await??;
    let elapsed = start.elapsed();
    Ok(Json(QueryResponse {
        query: params.q,
        total_hits: ids.len(),
        ids: ids.into_iter().collect(),
        took_s: elapsed.as_secs_f64(),
    }))
}

pub async fn index_handler(
    State(state): State<AppState>,
    req: Result<Json<IndexRequest>, JsonRejection>,
) -> Result<Json<IndexResponse>, ApiError> {
    let Json(req) = req?;
    let engine = state.engine.clone();
    let id = spawn_blocking(move || engine.write().index(req.id, &req.tokens)).await??;
    Ok(Json(IndexResponse { id }))
}
