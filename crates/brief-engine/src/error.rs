//! Error types for brief-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BriefError {
    #[error("Invalid working hours {start_hour}..{end_hour}: start must precede end, both within 0-23")]
    InvalidWorkingHours { start_hour: u32, end_hour: u32 },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Nonexistent local time: {0}")]
    NonexistentLocalTime(String),
}

pub type Result<T> = std::result::Result<T, BriefError>;
