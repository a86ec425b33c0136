//! Records exchanged with the timetabling REST API
//!
//! Every record is passed through verbatim. Server-computed display fields are
//! optional, and list-valued fields default to empty when the server omits them
//! or sends `null`.

pub mod stats;
pub mod timetable;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

pub use stats::{
    ClassGroupStats, ClassStatistics, CountGroupStats, DashboardStats, ImportStats,
    InstructorStatistics, RoomGroupStats, RoomStatistics, StudentGroupStats, TimeSlotGroupStats,
};
pub use timetable::{ClassInfo, DayGrid, Timetable, TimetableSchedule, TimetableStats};

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Collection payloads
// ============================================================================

/// A list endpoint response: either a bare array or a paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
pub enum ListPayload<T> {
    /// `[ {...}, {...} ]`
    Items(Vec<T>),
    /// `{ "count": 2, "next": null, "results": [ ... ] }`
    Page {
        #[serde(default, deserialize_with = "null_as_default")]
        results: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    /// The rows, whichever shape the server used
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Items(items) => items,
            ListPayload::Page { results } => results,
        }
    }
}

/// Decode a list endpoint body into rows.
///
/// `null` decodes to an empty list.
pub fn decode_list<T>(value: serde_json::Value) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if value.is_null() {
        return Ok(Vec::new());
    }
    let payload: ListPayload<T> = serde_json::from_value(value)?;
    Ok(payload.into_vec())
}

// ============================================================================
// Entities
// ============================================================================

/// A physical room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    /// Identifier assigned by the XML import, distinct from `id`
    #[serde(default)]
    pub xml_id: i64,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default)]
    pub is_constraint: bool,
}

impl Room {
    /// Human label: the location when known, otherwise the import id
    pub fn label(&self) -> String {
        if self.location.trim().is_empty() {
            format!("Aula {}", self.xml_id)
        } else {
            self.location.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i64,
    #[serde(default)]
    pub xml_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Server-computed
    #[serde(default)]
    pub class_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub xml_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default)]
    pub class_count: Option<u32>,
}

/// A time slot offered for a class, as nested in class detail responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: String,
    #[serde(default)]
    pub start_time: u32,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub preference: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub day_names: Vec<String>,
    #[serde(default)]
    pub start_time_formatted: Option<String>,
    #[serde(default)]
    pub end_time_formatted: Option<String>,
}

/// A class section
///
/// The list endpoint returns a reduced shape; the detail endpoint adds the
/// nested time slots and room names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    #[serde(default)]
    pub xml_id: i64,
    #[serde(default)]
    pub offering_name: Option<String>,
    #[serde(default)]
    pub class_limit: u32,
    /// Finalized (non-draft) class
    #[serde(default)]
    pub committed: bool,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructor_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub student_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(default)]
    pub xml_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub enrolled_classes_count: Option<u32>,
}

/// Enrollment link between a student and a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentClass {
    pub id: i64,
    #[serde(default)]
    pub student: i64,
    #[serde(default)]
    pub class_obj: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub class_info: Option<String>,
}

/// One generated timetable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Opaque optimizer output
    #[serde(default)]
    pub fitness_score: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub assignment_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Schedule {
    /// `created_at` as `YYYY-MM-DD HH:MM` in UTC, or verbatim when it is not RFC 3339
    pub fn created_display(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|ts| ts.with_timezone(&chrono::Utc).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// A class placed in a room at a time, as returned by the per-room
/// assignment endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassAssignment {
    #[serde(default)]
    pub id: Option<i64>,
    pub class_id: i64,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub room_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructor_name: String,
    /// Seven characters, index 0 = Sunday, `'1'` = occupied
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: String,
    /// Minutes from midnight
    #[serde(default)]
    pub start_time: u32,
    /// Minutes
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub student_count: u32,
    /// Display only; never used for filtering
    #[serde(default)]
    pub has_conflict: bool,
}

impl ClassAssignment {
    /// Title shown on calendar entries
    pub fn title(&self) -> String {
        match &self.class_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Clase {}", self.class_id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_and_page_decode_to_same_rows() {
        let rows = json!([
            {"id": 1, "xml_id": 10, "capacity": 40, "location": "A-101", "is_constraint": false},
            {"id": 2, "xml_id": 11, "capacity": 25, "location": "B-201", "is_constraint": true}
        ]);
        let page = json!({"count": 2, "next": null, "previous": null, "results": rows.clone()});

        let flat: Vec<Room> = decode_list(rows).unwrap();
        let paged: Vec<Room> = decode_list(page).unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat, paged);
    }

    #[test]
    fn test_null_and_missing_results_are_empty() {
        let none: Vec<Room> = decode_list(serde_json::Value::Null).unwrap();
        assert!(none.is_empty());

        let missing: Vec<Room> = decode_list(json!({"count": 0})).unwrap();
        assert!(missing.is_empty());

        let null_results: Vec<Room> = decode_list(json!({"results": null})).unwrap();
        assert!(null_results.is_empty());
    }

    #[test]
    fn test_decode_list_rejects_scalars() {
        let result: Result<Vec<Room>> = decode_list(json!("nope"));
        assert!(result.is_err());
    }

    #[test]
    fn test_room_null_location_and_label() {
        let room: Room =
            serde_json::from_value(json!({"id": 3, "xml_id": 77, "capacity": 10, "location": null}))
                .unwrap();
        assert_eq!(room.location, "");
        assert!(!room.is_constraint);
        assert_eq!(room.label(), "Aula 77");
    }

    #[test]
    fn test_class_list_shape_fills_defaults() {
        let class: Class = serde_json::from_value(json!({
            "id": 5,
            "xml_id": 500,
            "class_limit": 30,
            "offering_name": "Álgebra",
            "instructor_names": null
        }))
        .unwrap();

        assert!(class.instructor_names.is_empty());
        assert!(class.time_slots.is_empty());
        assert!(!class.committed);
    }

    #[test]
    fn test_schedule_created_display() {
        let schedule: Schedule = serde_json::from_value(json!({
            "id": 1,
            "name": "Semestre 1",
            "description": null,
            "fitness_score": 9850.5,
            "is_active": true,
            "created_at": "2024-03-01T10:15:00Z"
        }))
        .unwrap();
        assert_eq!(schedule.created_display(), "2024-03-01 10:15");

        let raw = Schedule { created_at: "ayer".to_string(), ..schedule };
        assert_eq!(raw.created_display(), "ayer");
    }

    #[test]
    fn test_assignment_title_falls_back_to_class_id() {
        let assignment: ClassAssignment = serde_json::from_value(json!({
            "class_id": 12,
            "room_id": 3,
            "instructor_name": "Dra. Ruiz",
            "days": "0101000",
            "start_time": 480,
            "length": 90
        }))
        .unwrap();

        assert_eq!(assignment.title(), "Clase 12");
        assert!(!assignment.has_conflict);
        assert_eq!(assignment.student_count, 0);
    }
}
