//! API client module
//!
//! HTTP client for the timetabling REST API.

pub mod client;
pub mod endpoints;
#[cfg(test)]
pub mod fake;
pub mod resource;
pub mod types;

pub use client::{ApiClient, TimetableApi};
pub use resource::{Editable, Labels, MutationLabels, Resource};
pub use types::*;
