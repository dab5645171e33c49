//! Span helpers for request and conversion tracing.

use std::future::Future;
use tracing::{info_span, Instrument, Span};

/// Span covering a single time conversion.
pub fn conversion_span(locale: &str, input: &str) -> Span {
    info_span!(
        "conversion",
        locale = %locale,
        input = %input,
        error = tracing::field::Empty
    )
}

/// Span covering a batch upload. `times` is recorded once parsing finishes.
pub fn batch_span(locale: &str, bytes: usize) -> Span {
    info_span!(
        "batch",
        locale = %locale,
        bytes = bytes,
        times = tracing::field::Empty,
        error = tracing::field::Empty
    )
}

/// Instrument a future with a span.
pub fn instrument_future<F: Future>(future: F, span: Span) -> impl Future<Output = F::Output> {
    future.instrument(span)
}

/// Record an error on the current span's `error` field.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", tracing::field::display(error));
}

/// Timing utility for operations.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Complete the timer and log the elapsed time at debug level.
    pub fn finish(self) -> std::time::Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_us = duration.as_micros() as u64,
            "operation completed"
        );
        duration
    }
}

/// Time a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
