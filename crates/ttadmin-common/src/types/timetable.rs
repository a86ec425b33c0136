//! Server-pivoted timetable returned by `GET /schedules/{id}/timetable/`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// `time label -> classes` for a single day
pub type DayGrid = BTreeMap<String, Vec<ClassInfo>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableSchedule {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub fitness_score: f64,
    pub total_assignments: u64,
}

/// A class as placed in one grid cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassInfo {
    pub id: i64,
    pub xml_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instructors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub room: String,
    pub room_capacity: u32,
    pub limit: u32,
    pub students: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end: String,
    pub duration_min: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableStats {
    pub total_classes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub classes_by_day: BTreeMap<String, u64>,
    pub max_concurrent_classes: u64,
    pub needs_multiple_views: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timetable {
    pub schedule: TimetableSchedule,
    #[serde(deserialize_with = "null_as_default")]
    pub time_slots: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub days: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub grid: BTreeMap<String, DayGrid>,
    #[serde(deserialize_with = "null_as_default")]
    pub classes: Vec<ClassInfo>,
    pub stats: TimetableStats,
}

impl Timetable {
    /// Day tabs in display order.
    ///
    /// Falls back to the grid's own keys when the server sends no `days`.
    pub fn day_names(&self) -> Vec<String> {
        if self.days.is_empty() {
            self.grid.keys().cloned().collect()
        } else {
            self.days.clone()
        }
    }

    /// The day a viewer opens on
    pub fn default_day(&self) -> Option<String> {
        self.day_names().into_iter().next()
    }

    /// The grid for `day`, or `None` when the server sent nothing for it
    pub fn day_grid(&self, day: &str) -> Option<&DayGrid> {
        self.grid.get(day)
    }

    /// Non-empty cells of `day`, in chronological order
    pub fn day_cells(&self, day: &str) -> Vec<(&str, &[ClassInfo])> {
        self.day_grid(day)
            .map(|grid| {
                grid.iter()
                    .filter(|(_, classes)| !classes.is_empty())
                    .map(|(label, classes)| (label.as_str(), classes.as_slice()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of placements on `day`, preferring the server's own count
    pub fn classes_on(&self, day: &str) -> u64 {
        self.stats
            .classes_by_day
            .get(day)
            .copied()
            .unwrap_or_else(|| {
                self.day_grid(day)
                    .map(|grid| grid.values().map(|c| c.len() as u64).sum())
                    .unwrap_or(0)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.grid.values().all(|day| day.values().all(Vec::is_empty))
    }
}
