//! Liveness probe for the diary service, mounted at the root (outside `/api`).
//!
//! Always answers 200; a failing record store only downgrades `status`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the record store does not answer a ping.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.diaries.store_healthy().await;

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// ```text
/// GET /health -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
