//! Conversion service shared by the HTTP handlers.

use spoken_time_common_log::spans;
use spoken_time_core::{
    parse_time, BatchParser, FormatterRegistry, Result, SpokenResult, TimeFormatter, TimeValue,
};
use std::sync::Arc;
use tracing::debug;

/// Validates input, resolves the formatter and speaks the time.
#[derive(Debug, Clone)]
pub struct SpokenTimeService {
    registry: Arc<FormatterRegistry>,
    batch: BatchParser,
}

impl SpokenTimeService {
    pub fn new(registry: FormatterRegistry, batch: BatchParser) -> Self {
        Self {
            registry: Arc::new(registry),
            batch,
        }
    }

    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    /// Convert an `HH:mm` string.
    pub fn from_text(&self, time: Option<&str>, locale: Option<&str>) -> Result<SpokenResult> {
        let formatter = self.registry.get(locale)?;
        let _span = spans::conversion_span(formatter.locale(), time.unwrap_or_default()).entered();

        let result = parse_time(time).and_then(|value| speak(value, formatter.as_ref()));
        traced(result)
    }

    /// Convert an hour and minute given separately.
    pub fn from_parts(&self, hour: i32, minute: i32, locale: Option<&str>) -> Result<SpokenResult> {
        let formatter = self.registry.get(locale)?;
        let input = format!("{}:{}", hour, minute);
        let _span = spans::conversion_span(formatter.locale(), &input).entered();

        let result =
            TimeValue::new(hour, minute).and_then(|value| speak(value, formatter.as_ref()));
        traced(result)
    }

    /// Convert every time in a comma/newline separated document.
    pub fn from_batch(&self, content: &str, locale: Option<&str>) -> Result<Vec<SpokenResult>> {
        let formatter = self.registry.get(locale)?;
        let span = spans::batch_span(formatter.locale(), content.len());
        let _guard = span.enter();

        let results = traced(spoken_time_common_log::timed!(
            "batch_conversion",
            self.batch.convert(content, formatter.as_ref())
        ))?;
        span.record("times", results.len());

        Ok(results)
    }
}

fn traced<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        spans::record_error(err);
    }
    result
}

fn speak(value: TimeValue, formatter: &dyn TimeFormatter) -> Result<SpokenResult> {
    let result = value.speak(formatter)?;
    debug!(original = %result.original, spoken = %result.spoken, "Converted time");
    Ok(result)
}
