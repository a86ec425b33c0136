//! Error types shared across the timetable console

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Main error type for shared timetable code
#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown weekday: '{0}'. Use a day name (Lunes, Monday) or an index 0-6 with 0 = Sunday")]
    UnknownWeekday(String),
}
