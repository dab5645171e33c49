//! Locale formatters turning an hour and minute into a spoken phrase.

use crate::error::{Result, TimeError};
use crate::words::number_to_words;

/// Capability shared by every locale formatter.
pub trait TimeFormatter: Send + Sync {
    /// Registry key of the locale this formatter speaks.
    fn locale(&self) -> &'static str;

    /// Render `hour24:minute` as a spoken phrase.
    ///
    /// Implementations must reject values outside `0..=23` / `0..=59`
    /// instead of wrapping them.
    fn format(&self, hour24: i32, minute: i32) -> Result<String>;
}

/// British English phrasing: "half past seven", "quarter to ten", "noon".
#[derive(Debug, Clone, Copy, Default)]
pub struct BritishFormatter;

impl BritishFormatter {
    pub const LOCALE: &'static str = "british";

    pub fn new() -> Self {
        Self
    }
}

impl TimeFormatter for BritishFormatter {
    fn locale(&self) -> &'static str {
        Self::LOCALE
    }

    fn format(&self, hour24: i32, minute: i32) -> Result<String> {
        if !(0..=23).contains(&hour24) {
            return Err(TimeError::HourOutOfRange);
        }
        if !(0..=59).contains(&minute) {
            return Err(TimeError::MinuteOutOfRange);
        }

        // Rules are evaluated in order; later rules assume earlier ones missed.
        if hour24 == 0 && minute == 0 {
            return Ok("midnight".to_string());
        }
        if hour24 == 12 && minute == 0 {
            return Ok("noon".to_string());
        }

        let hour12 = to_12_hour(hour24);
        let hour_word = number_to_words(hour12)?;

        if minute == 0 {
            return Ok(format!("{} o'clock", hour_word));
        }
        if minute == 15 {
            return Ok(format!("quarter past {}", hour_word));
        }
        if minute == 30 {
            return Ok(format!("half past {}", hour_word));
        }
        if minute == 45 {
            return Ok(format!("quarter to {}", number_to_words(next_hour(hour12))?));
        }

        if minute < 30 {
            if minute % 5 == 0 {
                return Ok(format!("{} past {}", number_to_words(minute)?, hour_word));
            }
            return Ok(format!("{} {}", hour_word, number_to_words(minute)?));
        }

        let to = 60 - minute;
        if to % 5 == 0 {
            return Ok(format!(
                "{} to {}",
                number_to_words(to)?,
                number_to_words(next_hour(hour12))?
            ));
        }

        // Non-aligned minutes read digit-style against the current hour.
        Ok(format!("{} {}", hour_word, number_to_words(minute)?))
    }
}

fn to_12_hour(hour24: i32) -> i32 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}

fn next_hour(hour12: i32) -> i32 {
    if hour12 == 12 {
        1
    } else {
        hour12 + 1
    }
}
