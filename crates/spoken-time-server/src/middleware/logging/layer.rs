//! Request logging middleware.

use crate::config::LoggingConfig;
use axum::{body::Body, extract::Request, http::Response};
use futures::future::BoxFuture;
use std::{
    sync::Arc,
    task::{Context, Poll},
    time::Instant,
};
use tower::{Layer, Service};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Header carrying the request id set by `SetRequestIdLayer`.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Which requests get logged.
#[derive(Debug, Clone, Default)]
pub struct RequestLogConfig {
    /// Path prefixes to skip, e.g. health probes.
    pub exclude_paths: Vec<String>,
}

impl RequestLogConfig {
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_paths.iter().any(|p| path.starts_with(p.as_str()))
    }
}

impl From<&LoggingConfig> for RequestLogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            exclude_paths: config.exclude_paths.clone(),
        }
    }
}

/// Request logging layer.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    config: Arc<RequestLogConfig>,
}

impl LoggingLayer {
    pub fn with_config(config: RequestLogConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingMiddleware {
            inner,
            config: self.config.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingMiddleware<S> {
    inner: S,
    config: Arc<RequestLogConfig>,
}

impl<S> Service<Request> for LoggingMiddleware<S>
where
    S: Service<Request, Response = Response<Body>, Error = std::convert::Infallible>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // The clone may not be ready; swap so the polled service handles this call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if self.config.is_excluded(req.uri().path()) {
            return Box::pin(inner.call(req));
        }

        let method = req.method().clone();
        let uri = req.uri().clone();
        let version = req.version();

        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let client_ip = req
            .headers()
            .get("x-forwarded-for")
            .or_else(|| req.headers().get("x-real-ip"))
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let span = info_span!(
            "request",
            request_id = %request_id,
            method = %method,
            path = %uri.path(),
            client_ip = %client_ip,
        );

        Box::pin(
            async move {
                let start = Instant::now();
                info!(event = "request_started", uri = %uri, version = ?version);

                let response = inner.call(req).await?;

                let status = response.status();
                let duration_ms = start.elapsed().as_millis() as u64;
                if status.is_server_error() {
                    warn!(event = "request_completed", status = status.as_u16(), duration_ms);
                } else {
                    info!(event = "request_completed", status = status.as_u16(), duration_ms);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}
