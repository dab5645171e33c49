//! Internal routes for health checks.

use crate::handlers::health;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Create the internal routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
}
