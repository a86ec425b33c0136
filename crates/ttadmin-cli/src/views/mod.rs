//! View state machines
//!
//! A view owns what the operator sees for one screen: the loaded data, the
//! single localized error string, and any confirmation notice. Views never
//! print; `render` turns their state into output.

pub mod dashboard;
pub mod importer;
pub mod list;
pub mod schedule;

pub use dashboard::DashboardView;
pub use importer::ImportView;
pub use list::{DeleteOutcome, ListView};
pub use schedule::{RoomPager, TimetableView};

use crate::error::CliError;
use tracing::debug;

/// Message a view shows for `err`; the underlying cause goes to the debug log
pub fn localize(err: &CliError, fallback: &str) -> String {
    debug!(error = %err, "{}", fallback);
    err.localized(fallback)
}
