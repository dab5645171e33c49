//! Logs a few conversions as JSON to stderr and to a file.

use std::path::PathBuf;
use spoken_time_common_log::{debug, info, init, spans, warn, LogConfig, LogFormat, LogLevel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = PathBuf::from("/tmp/spoken-time-demo.log");
    init(LogConfig {
        level: LogLevel::Debug,
        format: LogFormat::Json,
        file_path: Some(log_file.clone()),
        timestamps: true,
        source_location: true,
        span_events: true,
    })?;

    for input in ["07:30", "12:00", "25:99"] {
        let span = spans::conversion_span("british", input);
        let _guard = span.enter();

        if input.starts_with("25") {
            warn!(input, "hour out of range");
        } else {
            debug!(input, "converting");
        }
    }

    info!(path = %log_file.display(), "demo finished");
    Ok(())
}
