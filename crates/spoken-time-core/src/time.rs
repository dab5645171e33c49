//! Validated clock times and the result of speaking them.

use crate::error::{Result, TimeError};
use crate::formatter::TimeFormatter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 24-hour clock time with both fields already range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    /// Validate `hour` and `minute`. The hour is checked first.
    pub fn new(hour: i32, minute: i32) -> Result<Self> {
        if !(0..=23).contains(&hour) {
            return Err(TimeError::HourOutOfRange);
        }
        if !(0..=59).contains(&minute) {
            return Err(TimeError::MinuteOutOfRange);
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse an `HH:mm` string.
    ///
    /// Surrounding whitespace is ignored; each part must be an integer.
    /// Leading zeros are optional, so `"7:5"` is the same as `"07:05"`.
    ///
    /// Empty parts are kept when splitting on `:`, so exactly two parts are
    /// required: `"07:30:"` is a format error and `"07:"` or `":"` fail as
    /// non-numeric. A splitter that drops trailing empty parts would instead
    /// accept `"07:30:"` and report `"07:"` as a format error.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TimeError::MissingInput);
        }

        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 2 {
            return Err(TimeError::bad_format());
        }

        let hour = parts[0].parse::<i32>().map_err(|_| TimeError::bad_number())?;
        let minute = parts[1].parse::<i32>().map_err(|_| TimeError::bad_number())?;

        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Speak this time with the given formatter.
    pub fn speak(&self, formatter: &dyn TimeFormatter) -> Result<SpokenResult> {
        let spoken = formatter.format(i32::from(self.hour), i32::from(self.minute))?;
        Ok(SpokenResult {
            original: self.to_string(),
            spoken,
        })
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeValue {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse an optional `HH:mm` input, treating `None` as missing.
pub fn parse_time(input: Option<&str>) -> Result<TimeValue> {
    match input {
        Some(s) => TimeValue::parse(s),
        None => Err(TimeError::MissingInput),
    }
}

/// A converted time as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenResult {
    /// The input time, zero padded as `HH:MM`.
    pub original: String,
    /// The spoken phrase.
    pub spoken: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::BritishFormatter;

    #[test]
    fn test_parse_valid_times() {
        let cases = vec![
            ("07:30", (7, 30)),
            ("00:00", (0, 0)),
            ("23:59", (23, 59)),
            ("7:5", (7, 5)),
            ("  12:00  ", (12, 0)),
            ("+9:+45", (9, 45)),
        ];

        for (input, (hour, minute)) in cases {
            let time = TimeValue::parse(input).unwrap();
            assert_eq!((time.hour(), time.minute()), (hour, minute), "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_parse_missing_input() {
        assert_eq!(parse_time(None), Err(TimeError::MissingInput));
        assert_eq!(TimeValue::parse(""), Err(TimeError::MissingInput));
        assert_eq!(TimeValue::parse("   "), Err(TimeError::MissingInput));
    }

    #[test]
    fn test_parse_wrong_part_count() {
        for input in ["badinput", "07", "07:30:00", "07:30:", "::"] {
            let err = TimeValue::parse(input).unwrap_err();
            assert_eq!(err.to_string(), "time must be in HH:mm format", "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_parse_non_numeric() {
        for input in ["ab:cd", "07:", ":30", ":", "07: 30", "7.5:10", "seven:30"] {
            let err = TimeValue::parse(input).unwrap_err();
            assert_eq!(err.to_string(), "invalid numeric time format", "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_hour_checked_before_minute() {
        assert_eq!(TimeValue::parse("25:99"), Err(TimeError::HourOutOfRange));
        assert_eq!(TimeValue::new(25, 0), Err(TimeError::HourOutOfRange));
        assert_eq!(TimeValue::new(-1, 0), Err(TimeError::HourOutOfRange));
        assert_eq!(TimeValue::new(10, 99), Err(TimeError::MinuteOutOfRange));
        assert_eq!(TimeValue::new(10, 60), Err(TimeError::MinuteOutOfRange));
        assert_eq!(TimeValue::new(10, -1), Err(TimeError::MinuteOutOfRange));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(TimeValue::new(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(TimeValue::new(23, 45).unwrap().to_string(), "23:45");
        assert_eq!("9:0".parse::<TimeValue>().unwrap().to_string(), "09:00");
    }

    #[test]
    fn test_speak() {
        let result = TimeValue::parse("07:30").unwrap().speak(&BritishFormatter).unwrap();
        assert_eq!(result.original, "07:30");
        assert_eq!(result.spoken, "half past seven");

        let result = TimeValue::new(11, 55).unwrap().speak(&BritishFormatter).unwrap();
        assert_eq!(result.spoken, "five to twelve");

        let result = TimeValue::parse("00:00").unwrap().speak(&BritishFormatter).unwrap();
        assert_eq!(result.spoken, "midnight");
    }

    #[test]
    fn test_spoken_result_field_names() {
        let result = SpokenResult {
            original: "09:45".into(),
            spoken: "quarter to ten".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["original"], "09:45");
        assert_eq!(json["spoken"], "quarter to ten");
    }
}
