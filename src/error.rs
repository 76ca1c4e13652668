//! Hard/transport errors surfaced at the HTTP boundary.
//!
//! Domain-level outcomes (unknown product, empty cart, unknown tool) are
//! never errors here; they travel back to the agent as ordinary result data.
//! This type only covers failures of the plumbing itself.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("token exchange request failed: {0}")]
    TokenRequest(#[from] reqwest::Error),
    #[error("token endpoint returned {status}: {body}")]
    TokenRejected { status: u16, body: String },
    #[error("token endpoint response missing credential value")]
    TokenMissingValue,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "request failed");

        // All current variants come from the upstream token exchange.
        let status = StatusCode::BAD_GATEWAY;
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
