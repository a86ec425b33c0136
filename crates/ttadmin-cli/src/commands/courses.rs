//! `ttadmin courses` command implementation

use super::crud;
use crate::api::types::{Class, Course};
use crate::api::TimetableApi;
use crate::error::Result;
use crate::render::OutputFormat;
use crate::CourseCommand;

pub async fn run<A: TimetableApi>(api: &A, command: &CourseCommand, format: OutputFormat) -> Result<()> {
    match command {
        CourseCommand::List => crud::list::<Course, _>(api, format).await,
        CourseCommand::Show { id } => crud::show::<Course, _>(api, *id, format).await,
        CourseCommand::Classes { id } => {
            crud::related::<Class, _>(
                api,
                ("courses", *id, "classes"),
                &format!("Clases del curso {}", id),
                "No hay clases para este curso",
                "Error al cargar las clases",
                format,
            )
            .await
        },
    }
}
