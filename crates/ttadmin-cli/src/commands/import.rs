//! `ttadmin import` command implementation

use super::finish;
use crate::api::TimetableApi;
use crate::error::Result;
use crate::progress::with_spinner;
use crate::render::{self, OutputFormat};
use crate::views::ImportView;
use std::path::PathBuf;

pub async fn run<A: TimetableApi>(
    api: &A,
    file: Option<PathBuf>,
    keep_existing: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut view = ImportView::new(!keep_existing);
    view.select(file);

    if view.file().is_some() && view.clear_existing() && format == OutputFormat::Table {
        render::print_warning("Se eliminarán todos los datos existentes antes de importar");
    }

    with_spinner("Importando...", view.submit(api)).await;
    render::render_import(&view, format)?;
    finish(view.error())
}
