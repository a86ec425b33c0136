//! `ttadmin dashboard` command implementation

use super::finish;
use crate::api::TimetableApi;
use crate::error::Result;
use crate::progress::with_spinner;
use crate::render::{self, OutputFormat};
use crate::views::dashboard::LOADING;
use crate::views::DashboardView;

pub async fn run<A: TimetableApi>(api: &A, format: OutputFormat) -> Result<()> {
    let mut view = DashboardView::new();
    with_spinner(LOADING, view.load(api)).await;
    render::render_dashboard(&view, format)?;
    finish(view.error())
}
