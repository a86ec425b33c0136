//! Error types for the timetable console
//!
//! `CliError` carries the technical cause. Views translate it into the single
//! localized message shown to the operator; the cause goes to the log.

use thiserror::Error;
use ttadmin_common::TimetableError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// The server answered with a non-success status; `message` comes from the body
    #[error("Server responded {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Api { status: u16, message: Option<String> },

    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// A view finished in its error state; the message is already localized
    #[error("{0}")]
    View(String),

    #[error("Network request failed: {0}. Check that the API server is running and the API URL is correct.")]
    Http(#[from] reqwest::Error),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}. Check TTADMIN_* environment variables or the config file.")]
    Config(String),

    #[error(transparent)]
    Common(#[from] TimetableError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: Some(message.into()),
        }
    }

    /// A failure status whose body carried no message
    pub fn status(status: u16) -> Self {
        Self::Api {
            status,
            message: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn view(msg: impl Into<String>) -> Self {
        Self::View(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Message the server put in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// The message a view displays: client-side validation text verbatim,
    /// everything else replaced by `fallback`
    pub fn localized(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) | Self::View(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}
