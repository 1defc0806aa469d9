use axum::{routing::get, Json, Router};

use crate::handlers;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /health -- liveness probe.
async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse { message: "ok" })
}

/// Mount health check routes (intended for root-level, NOT under `/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
