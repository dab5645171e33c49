//! Middleware for the spoken time API server.

pub mod logging;

pub use logging::{LoggingLayer, LoggingMiddleware, RequestLogConfig};
