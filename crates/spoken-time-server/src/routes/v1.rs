//! API v1 routes.

use crate::handlers::{self, docs};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Create the v1 API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/spoken-time", spoken_time_routes())
        // API documentation
        .route("/docs", get(docs::api_docs))
        .route("/openapi.json", get(docs::openapi_spec))
}

fn spoken_time_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::spoken_time))
        .route("/:hour/:minute", get(handlers::spoken_time_parts))
        .route("/upload", post(handlers::upload))
}
