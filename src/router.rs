//! Routing module for the voice ordering backend
//!
//! Thin HTTP facade over the core: parses request bodies, forwards into the
//! tool dispatcher / catalog / token exchange, and serializes the results
//! back verbatim.

use crate::{cart::SharedState, error::ApiError, realtime, tools};
use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let res = next.run(req).await;
        if res.status().is_success() {
            tracing::debug!(%method, %uri, status = %res.status(), "request");
        } else {
            tracing::warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    Router::new()
        .route("/", get(root))
        .route("/api/v1/products", get(get_products))
        .route("/api/v1/cart/:session_id", get(get_cart))
        .route("/api/v1/openai/ephemeral-key", post(create_ephemeral_key))
        .route("/api/v1/openai/function-call", post(handle_function_call))
        .layer(log_layer)
        .layer(cors_layer(&state.settings.cors_origins))
        .with_state(state)
}

/// Builds the CORS layer from the configured origins. A `*` entry (or an
/// unparsable origin list) falls back to the permissive setup.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Option<Vec<HeaderValue>> = origins
        .iter()
        .map(|o| o.parse::<HeaderValue>().ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match parsed {
        Some(list) if !origins.iter().any(|o| o == "*") => layer.allow_origin(list),
        _ => layer.allow_origin(Any),
    }
}

// =============================================================================
// Request / Response Models
// =============================================================================

#[derive(Debug, Deserialize)]
struct EphemeralKeyRequest {
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct EphemeralKeyResponse {
    session_id: String,
    ephemeral_key: String,
}

#[derive(Debug, Deserialize)]
struct FunctionCallRequest {
    name: String,

    #[serde(default)]
    arguments: Value,
}

// =============================================================================
// Handlers
// =============================================================================

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Restaurant Voice Ordering API" }))
}

/// Endpoint: GET /api/v1/products
async fn get_products(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({ "products": state.catalog.list() }))
}

/// Endpoint: GET /api/v1/cart/:session_id
///
/// Lenient read: peeking at an unknown session materializes its empty state.
async fn get_cart(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = state.store.read(&session_id);
    Json(json!({
        "items": session.items,
        "total": session.total(),
        "customer": session.customer,
    }))
}

/// Endpoint: POST /api/v1/openai/ephemeral-key
///
/// Generates a session id when the client did not supply one, then trades
/// the server credential for a short-lived client token.
async fn create_ephemeral_key(
    State(state): State<SharedState>,
    Json(payload): Json<EphemeralKeyRequest>,
) -> Result<Json<EphemeralKeyResponse>, ApiError> {
    let session_id = payload
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let ephemeral_key = realtime::create_ephemeral_key(&state, &session_id).await?;

    tracing::info!(%session_id, "issued ephemeral key");
    Ok(Json(EphemeralKeyResponse {
        session_id,
        ephemeral_key,
    }))
}

/// Endpoint: POST /api/v1/openai/function-call
///
/// Executes one tool call on behalf of the remote agent and returns the
/// handler's result bag verbatim. Always 200 for a well-formed body; domain
/// problems come back inside the bag.
async fn handle_function_call(
    State(state): State<SharedState>,
    Json(payload): Json<FunctionCallRequest>,
) -> impl IntoResponse {
    Json(tools::dispatch(&state, &payload.name, payload.arguments))
}
