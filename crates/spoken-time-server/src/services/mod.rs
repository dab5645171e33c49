//! Business logic behind the HTTP handlers.

pub mod spoken_time;

pub use spoken_time::SpokenTimeService;
