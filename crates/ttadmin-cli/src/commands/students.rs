//! `ttadmin students` command implementation

use super::crud;
use crate::api::types::{Student, StudentClass};
use crate::api::TimetableApi;
use crate::error::Result;
use crate::render::OutputFormat;
use crate::StudentCommand;

pub async fn run<A: TimetableApi>(api: &A, command: &StudentCommand, format: OutputFormat) -> Result<()> {
    match command {
        StudentCommand::List => crud::list::<Student, _>(api, format).await,
        StudentCommand::Show { id } => crud::show::<Student, _>(api, *id, format).await,
        StudentCommand::Create { fields } => {
            crud::create::<Student, _>(api, |form| fields.apply(form), format).await
        },
        StudentCommand::Update { id, fields } => {
            crud::update::<Student, _>(api, *id, |form| fields.apply(form), format).await
        },
        StudentCommand::Delete { id, yes } => crud::delete::<Student, _>(api, *id, *yes, format).await,
        StudentCommand::Classes { id } => {
            crud::related::<StudentClass, _>(
                api,
                ("students", *id, "classes"),
                &format!("Inscripciones del estudiante {}", id),
                "No hay inscripciones",
                "Error al cargar las inscripciones",
                format,
            )
            .await
        },
    }
}
