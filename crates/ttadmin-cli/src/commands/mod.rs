//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function. Commands drive a
//! view, render it, and turn a view left in its error state into a non-zero
//! exit.

pub mod classes;
pub mod config;
pub mod courses;
pub mod crud;
pub mod dashboard;
pub mod import;
pub mod instructors;
pub mod rooms;
pub mod schedules;
pub mod students;

use crate::error::{CliError, Result};

/// Success unless the view ended with an error message
pub fn finish(error: Option<&str>) -> Result<()> {
    match error {
        Some(message) => Err(CliError::view(message)),
        None => Ok(()),
    }
}
