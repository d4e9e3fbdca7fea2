//! Error types for slot computation and layout.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The string is not a known IANA timezone identifier. Never silently
    /// defaulted to UTC.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The weekly rule set is malformed (wrong count, duplicate day, or an
    /// enabled window with start >= end).
    #[error("Invalid availability: {0}")]
    InvalidAvailability(String),

    /// The event duration cannot produce slots.
    #[error("Invalid event duration: {0} minutes")]
    InvalidDuration(u32),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
