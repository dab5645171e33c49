//! Comma and newline separated batches of `HH:mm` times.

use crate::error::{Result, TimeError};
use crate::formatter::TimeFormatter;
use crate::time::{SpokenResult, TimeValue};
use tracing::debug;

/// Default cap on the number of times accepted in a single batch.
pub const DEFAULT_MAX_TIMES: usize = 10_000;

/// Parser for batch input such as an uploaded CSV file.
///
/// Each line is split on commas, tokens are trimmed and empty tokens are
/// skipped. Any token that fails to parse rejects the whole batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchParser {
    max_times: usize,
}

impl BatchParser {
    pub fn new() -> Self {
        Self {
            max_times: DEFAULT_MAX_TIMES,
        }
    }

    /// Set the maximum number of times a batch may hold.
    pub fn with_max_times(mut self, max_times: usize) -> Self {
        self.max_times = max_times;
        self
    }

    pub fn max_times(&self) -> usize {
        self.max_times
    }

    /// Parse every time in `content`, preserving input order.
    pub fn parse(&self, content: &str) -> Result<Vec<TimeValue>> {
        if content.trim().is_empty() {
            return Err(TimeError::invalid_file("file is empty"));
        }

        // Lines end in `\n`, `\r\n` or a lone `\r`.
        let content = content.replace("\r\n", "\n");
        let mut times = Vec::new();
        for (line_no, line) in content.split(&['\n', '\r'][..]).enumerate() {
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let time = TimeValue::parse(token).map_err(|e| {
                    TimeError::invalid_file(format!("line {}: '{}': {}", line_no + 1, token, e))
                })?;

                if times.len() == self.max_times {
                    return Err(TimeError::invalid_file(format!(
                        "more than {} times in one file",
                        self.max_times
                    )));
                }
                times.push(time);
            }
        }

        if times.is_empty() {
            return Err(TimeError::invalid_file("no times found"));
        }

        debug!(count = times.len(), "Parsed batch");
        Ok(times)
    }

    /// Parse `content` and speak every time with `formatter`.
    pub fn convert(&self, content: &str, formatter: &dyn TimeFormatter) -> Result<Vec<SpokenResult>> {
        self.parse(content)?
            .iter()
            .map(|time| time.speak(formatter))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| match e {
                TimeError::InvalidFile(_) => e,
                other => TimeError::invalid_file(other.to_string()),
            })
    }
}

impl Default for BatchParser {
    fn default() -> Self {
        Self::new()
    }
}
