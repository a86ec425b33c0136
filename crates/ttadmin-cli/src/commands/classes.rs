//! `ttadmin classes` command implementation

use super::crud;
use crate::api::types::{Class, ClassStatistics, StudentClass};
use crate::api::TimetableApi;
use crate::error::Result;
use crate::render::OutputFormat;
use crate::ClassCommand;

pub async fn run<A: TimetableApi>(api: &A, command: &ClassCommand, format: OutputFormat) -> Result<()> {
    match command {
        ClassCommand::List => crud::list::<Class, _>(api, format).await,
        ClassCommand::Show { id } => crud::show::<Class, _>(api, *id, format).await,
        ClassCommand::Students { id } => {
            crud::related::<StudentClass, _>(
                api,
                ("classes", *id, "students"),
                &format!("Estudiantes de la clase {}", id),
                "No hay estudiantes inscritos",
                "Error al cargar los estudiantes",
                format,
            )
            .await
        },
        ClassCommand::Stats => {
            crud::statistics::<ClassStatistics, _>(api, "classes", "Estadísticas de Clases", format).await
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;

    #[tokio::test]
    async fn test_students_failure_is_localized() {
        let api = FakeApi::new();
        api.fail("GET classes/4/students");

        let err = run(&api, &ClassCommand::Students { id: 4 }, OutputFormat::Json)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error al cargar los estudiantes");
    }
}
