//! HTTP request handlers.
//!
//! Handlers stay thin: they bind request data, call the service and let
//! `ApiError` shape any failure.

pub mod docs;
pub mod health;
pub mod spoken_time;

pub use spoken_time::{spoken_time, spoken_time_parts, upload};
