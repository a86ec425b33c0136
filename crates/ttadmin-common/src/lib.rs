//! Timetable Admin Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared records, schedule transforms, and error handling for the
//! timetable administration console.
//!
//! # Overview
//!
//! - **Types**: the records exchanged verbatim with the timetabling REST API
//! - **Schedule**: day-bitmask decoding, clock formatting, calendar events and
//!   the day/time grid pivot used by the schedule viewers
//! - **Logging**: tracing subscriber setup shared by every binary
//!
//! # Example
//!
//! ```
//! use ttadmin_common::schedule::{decode_days, format_clock, Weekday};
//!
//! assert_eq!(decode_days("0110000"), vec![Weekday::Monday, Weekday::Tuesday]);
//! assert_eq!(format_clock(90), "01:30");
//! ```

pub mod error;
pub mod logging;
pub mod schedule;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TimetableError};
