//! Error handling for the spoken time API.

pub mod response;
pub mod types;

pub use response::{handle_panic, ErrorBody};
pub use types::{ApiError, ApiResult};
