//! Loading indicator shown while a request is outstanding
//!
//! The spinner draws on stderr and stays hidden when stderr is not a terminal,
//! so piped output and tests see nothing.

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Run `future` with a spinner labelled `message`, clearing it afterwards
pub async fn with_spinner<F>(message: &str, future: F) -> F::Output
where
    F: Future,
{
    let pb = create_spinner(message);
    let output = future.await;
    pb.finish_and_clear();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_spinner() {
        let pb = create_spinner("Cargando aulas...");
        assert!(!pb.is_finished());
        assert_eq!(pb.message(), "Cargando aulas...");
        pb.finish();
    }

    #[tokio::test]
    async fn test_with_spinner_returns_output() {
        let value = with_spinner("Cargando...", async { 41 + 1 }).await;
        assert_eq!(value, 42);
    }
}
