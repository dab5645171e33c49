//! Health and readiness probes.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn liveness() -> impl IntoResponse {
    Json(json!({
        "status": "alive",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Ready once the formatter registry holds the configured default.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let registry = state.spoken_time.registry();

    Json(json!({
        "status": "ready",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "checks": {
            "default_locale": registry.default_locale(),
            "locales": registry.locales(),
            "max_batch_size": state.config.limits.max_batch_size
        }
    }))
}
