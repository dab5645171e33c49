//! Route configuration for the spoken time API server.

mod internal;
mod v1;

use crate::{
    error::{handle_panic, ApiError},
    middleware::{LoggingLayer, RequestLogConfig},
    state::AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Common middleware stack applied to all routes
    let common_middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(CompressionLayer::new());

    let mut router = Router::new()
        .nest("/api/v1", v1::router())
        .nest("/internal", internal::router())
        .route("/", get(root_handler))
        .fallback(fallback_handler)
        // Caps upload bodies; overflow surfaces as a multipart error, i.e. `invalid_file`.
        .layer(DefaultBodyLimit::max(config.limits.max_upload_bytes));

    if config.logging.log_requests {
        router = router.layer(LoggingLayer::with_config(RequestLogConfig::from(
            &config.logging,
        )));
    }

    router.layer(common_middleware).with_state(state)
}

async fn root_handler() -> impl IntoResponse {
    Redirect::to("/api/v1/docs")
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}
