//! `ttadmin instructors` command implementation

use super::crud;
use crate::api::types::{Class, Instructor, InstructorStatistics};
use crate::api::TimetableApi;
use crate::error::Result;
use crate::render::OutputFormat;
use crate::InstructorCommand;

pub async fn run<A: TimetableApi>(api: &A, command: &InstructorCommand, format: OutputFormat) -> Result<()> {
    match command {
        InstructorCommand::List => crud::list::<Instructor, _>(api, format).await,
        InstructorCommand::Show { id } => crud::show::<Instructor, _>(api, *id, format).await,
        InstructorCommand::Create { fields } => {
            crud::create::<Instructor, _>(api, |form| fields.apply(form), format).await
        },
        InstructorCommand::Update { id, fields } => {
            crud::update::<Instructor, _>(api, *id, |form| fields.apply(form), format).await
        },
        InstructorCommand::Delete { id, yes } => {
            crud::delete::<Instructor, _>(api, *id, *yes, format).await
        },
        InstructorCommand::Classes { id } => {
            crud::related::<Class, _>(
                api,
                ("instructors", *id, "classes"),
                &format!("Clases del instructor {}", id),
                "No hay clases asignadas",
                "Error al cargar las clases",
                format,
            )
            .await
        },
        InstructorCommand::Stats => {
            crud::statistics::<InstructorStatistics, _>(
                api,
                "instructors",
                "Estadísticas de Instructores",
                format,
            )
            .await
        },
    }
}
