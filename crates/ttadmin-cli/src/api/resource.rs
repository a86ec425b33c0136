//! REST resources the console knows how to list, and which of them it may edit
//!
//! Each resource names its collection path and the operator-facing strings
//! its view shows.

use crate::api::types::{
    Class, Course, Instructor, PersonForm, Room, RoomForm, Schedule, Student,
};
use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Strings every view of a resource shows
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_error: &'static str,
}

/// Strings only editable resources need
#[derive(Debug, Clone, Copy)]
pub struct MutationLabels {
    pub save_error: &'static str,
    pub delete_error: &'static str,
    pub confirm_delete: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

/// A collection served at `/{PATH}/`
pub trait Resource: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static {
    const PATH: &'static str;
    const LABELS: Labels;

    /// Local numeric id used in item paths
    fn id(&self) -> i64;
}

/// A resource with create / update / delete
pub trait Editable: Resource {
    type Form: Serialize + Clone + Default + Debug + Send + Sync + 'static;

    const MUTATION_LABELS: MutationLabels;

    /// Edit form pre-filled from a loaded record
    fn to_form(&self) -> Self::Form;

    /// Reject a form before anything is sent
    fn validate(_form: &Self::Form) -> Result<()> {
        Ok(())
    }
}

impl Resource for Room {
    const PATH: &'static str = "rooms";
    const LABELS: Labels = Labels {
        title: "Gestión de Aulas",
        loading: "Cargando aulas...",
        empty: "No hay aulas registradas. Importa un archivo XML o agrega manualmente.",
        load_error: "Error al cargar las aulas",
    };

    fn id(&self) -> i64 {
        self.id
    }
}

impl Editable for Room {
    type Form = RoomForm;

    const MUTATION_LABELS: MutationLabels = MutationLabels {
        save_error: "Error al guardar el aula",
        delete_error: "Error al eliminar el aula",
        confirm_delete: "¿Estás seguro de eliminar esta aula?",
        created: "Aula creada",
        updated: "Aula actualizada",
        deleted: "Aula eliminada",
    };

    fn to_form(&self) -> RoomForm {
        RoomForm::from(self)
    }
}

impl Resource for Instructor {
    const PATH: &'static str = "instructors";
    const LABELS: Labels = Labels {
        title: "Gestión de Instructores",
        loading: "Cargando instructores...",
        empty: "No hay instructores registrados. Importa un archivo XML o agrega manualmente.",
        load_error: "Error al cargar los instructores",
    };

    fn id(&self) -> i64 {
        self.id
    }
}

impl Editable for Instructor {
    type Form = PersonForm;

    const MUTATION_LABELS: MutationLabels = MutationLabels {
        save_error: "Error al guardar el instructor",
        delete_error: "Error al eliminar el instructor",
        confirm_delete: "¿Estás seguro de eliminar este instructor?",
        created: "Instructor creado",
        updated: "Instructor actualizado",
        deleted: "Instructor eliminado",
    };

    fn to_form(&self) -> PersonForm {
        PersonForm::from(self)
    }

    fn validate(form: &PersonForm) -> Result<()> {
        form.validate()
    }
}

impl Resource for Student {
    const PATH: &'static str = "students";
    const LABELS: Labels = Labels {
        title: "Gestión de Estudiantes",
        loading: "Cargando estudiantes...",
        empty: "No hay estudiantes registrados. Importa un archivo XML o agrega manualmente.",
        load_error: "Error al cargar los estudiantes",
    };

    fn id(&self) -> i64 {
        self.id
    }
}

impl Editable for Student {
    type Form = PersonForm;

    const MUTATION_LABELS: MutationLabels = MutationLabels {
        save_error: "Error al guardar el estudiante",
        delete_error: "Error al eliminar el estudiante",
        confirm_delete: "¿Estás seguro de eliminar este estudiante?",
        created: "Estudiante creado",
        updated: "Estudiante actualizado",
        deleted: "Estudiante eliminado",
    };

    fn to_form(&self) -> PersonForm {
        PersonForm::from(self)
    }

    fn validate(form: &PersonForm) -> Result<()> {
        form.validate()
    }
}

impl Resource for Course {
    const PATH: &'static str = "courses";
    const LABELS: Labels = Labels {
        title: "Cursos",
        loading: "Cargando cursos...",
        empty: "No hay cursos registrados. Importa un archivo XML para cargar los cursos.",
        load_error: "Error al cargar los cursos",
    };

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Class {
    const PATH: &'static str = "classes";
    const LABELS: Labels = Labels {
        title: "Gestión de Clases",
        loading: "Cargando clases...",
        empty: "No hay clases registradas. Importa un archivo XML para cargar las clases.",
        load_error: "Error al cargar las clases",
    };

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Schedule {
    const PATH: &'static str = "schedules";
    const LABELS: Labels = Labels {
        title: "Horarios Generados",
        loading: "Cargando horarios...",
        empty: "No hay horarios generados",
        load_error: "Error al cargar los horarios",
    };

    fn id(&self) -> i64 {
        self.id
    }
}
