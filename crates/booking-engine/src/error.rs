//! Error types for booking-engine parsing operations.
//!
//! The grid builder and slot generator are total; only the parsers that
//! turn caller-supplied strings into dates and weekdays can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;
