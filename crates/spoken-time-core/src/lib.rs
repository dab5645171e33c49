//! Spoken clock times.
//!
//! Converts a 24-hour clock time into the phrase a person would say,
//! e.g. `07:30` becomes "half past seven" and `00:00` becomes "midnight".
//!
//! ```
//! use spoken_time_core::{FormatterRegistry, TimeValue};
//!
//! let registry = FormatterRegistry::new();
//! let formatter = registry.get(Some("british")).unwrap();
//! let result = TimeValue::parse("09:45").unwrap().speak(formatter.as_ref()).unwrap();
//! assert_eq!(result.spoken, "quarter to ten");
//! ```

pub mod batch;
pub mod error;
pub mod formatter;
pub mod registry;
pub mod time;
pub mod words;

pub use batch::{BatchParser, DEFAULT_MAX_TIMES};
pub use error::{Result, TimeError};
pub use formatter::{BritishFormatter, TimeFormatter};
pub use registry::FormatterRegistry;
pub use time::{parse_time, SpokenResult, TimeValue};
pub use words::number_to_words;
