//! Request and response bodies that only the client sees
//!
//! Entity records live in `ttadmin_common::types`; this module holds the
//! write forms and the envelopes of the import and error responses.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};

pub use ttadmin_common::types::*;

// ============================================================================
// Write forms
// ============================================================================

/// Body of `POST /rooms/` and `PUT /rooms/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomForm {
    pub xml_id: i64,
    pub capacity: u32,
    pub location: String,
    pub is_constraint: bool,
}

impl From<&Room> for RoomForm {
    fn from(room: &Room) -> Self {
        Self {
            xml_id: room.xml_id,
            capacity: room.capacity,
            location: room.location.clone(),
            is_constraint: room.is_constraint,
        }
    }
}

/// Body for instructors and students, which share the same writable fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonForm {
    pub xml_id: i64,
    pub name: String,
    /// Sent as `""` when unknown
    pub email: String,
}

pub const NAME_REQUIRED: &str = "El nombre es obligatorio";

impl PersonForm {
    /// A person needs a non-blank name
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CliError::validation(NAME_REQUIRED));
        }
        Ok(())
    }
}

impl From<&Instructor> for PersonForm {
    fn from(instructor: &Instructor) -> Self {
        Self {
            xml_id: instructor.xml_id,
            name: instructor.name.clone(),
            email: instructor.email.clone().unwrap_or_default(),
        }
    }
}

impl From<&Student> for PersonForm {
    fn from(student: &Student) -> Self {
        Self {
            xml_id: student.xml_id,
            name: student.name.clone(),
            email: student.email.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Error body of a non-2xx response. Different endpoints use different keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
    pub detail: Option<String>,
}

impl ServerErrorBody {
    /// First non-blank of `error`, `message`, `detail`
    pub fn into_message(self) -> Option<String> {
        [self.error, self.message, self.detail]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

/// Response of `POST /import-xml/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub stats: ImportStats,
}

/// Response of `POST /schedules/{id}/activate/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivateResponse {
    pub status: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_key_precedence() {
        let body: ServerErrorBody =
            serde_json::from_value(json!({"detail": "Not found.", "error": "Archivo inválido"}))
                .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Archivo inválido"));

        let body: ServerErrorBody =
            serde_json::from_value(json!({"error": "", "detail": "Not found."})).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Not found."));

        let body: ServerErrorBody = serde_json::from_value(json!({"other": 1})).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn test_person_form_from_record_blanks_missing_email() {
        let instructor = Instructor {
            id: 4,
            xml_id: 40,
            name: "Dra. Ruiz".to_string(),
            email: None,
            class_count: Some(2),
        };
        let form = PersonForm::from(&instructor);
        assert_eq!(form.email, "");
        assert_eq!(form.xml_id, 40);
    }

    #[test]
    fn test_person_form_requires_name() {
        let blank = PersonForm {
            name: "   ".to_string(),
            ..PersonForm::default()
        };
        assert_eq!(blank.validate().unwrap_err().to_string(), NAME_REQUIRED);

        let named = PersonForm {
            name: "Ana Vega".to_string(),
            ..PersonForm::default()
        };
        assert!(named.validate().is_ok());
    }

    #[test]
    fn test_room_form_defaults() {
        let form = RoomForm::default();
        assert_eq!(form.xml_id, 0);
        assert_eq!(form.capacity, 0);
        assert_eq!(form.location, "");
        assert!(!form.is_constraint);
    }

    #[test]
    fn test_import_response_tolerates_missing_stats() {
        let response: ImportResponse =
            serde_json::from_value(json!({"success": true, "message": "ok"})).unwrap();
        assert!(response.success);
        assert_eq!(response.stats.rooms, 0);
    }
}
