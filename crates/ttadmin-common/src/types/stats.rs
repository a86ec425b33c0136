//! Aggregate counters: dashboard, import results and per-entity statistics
//!
//! All counters default to zero so a partial payload still renders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomGroupStats {
    pub total: u64,
    pub avg_capacity: f64,
    pub with_constraints: u64,
}

/// Shared shape of the instructor and course groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountGroupStats {
    pub total: u64,
    pub with_classes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassGroupStats {
    pub total: u64,
    pub committed: u64,
    pub with_instructor: u64,
    pub avg_limit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentGroupStats {
    pub total: u64,
    pub enrolled: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSlotGroupStats {
    pub total: u64,
}

/// Response of `GET /dashboard-stats/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub rooms: RoomGroupStats,
    pub instructors: CountGroupStats,
    pub courses: CountGroupStats,
    pub classes: ClassGroupStats,
    pub students: StudentGroupStats,
    pub timeslots: TimeSlotGroupStats,
}

/// Per-entity counts created by an XML import
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportStats {
    pub rooms: u64,
    pub instructors: u64,
    pub courses: u64,
    pub classes: u64,
    pub students: u64,
    #[serde(alias = "timeslots")]
    pub time_slots: u64,
    /// Older servers do not report enrollments
    pub enrollments: Option<u64>,
}

/// Response of `GET /rooms/statistics/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomStatistics {
    pub total_rooms: u64,
    pub average_capacity: f64,
    pub max_capacity: u64,
}

/// Response of `GET /instructors/statistics/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructorStatistics {
    pub total_instructors: u64,
    pub instructors_with_classes: u64,
    pub instructors_without_classes: u64,
}

/// Response of `GET /classes/statistics/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassStatistics {
    pub total_classes: u64,
    pub committed_classes: u64,
    pub classes_with_instructor: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_missing_groups_are_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "rooms": {"total": 12, "avg_capacity": 31.5, "with_constraints": 2}
        }))
        .unwrap();

        assert_eq!(stats.rooms.total, 12);
        assert_eq!(stats.students, StudentGroupStats::default());
        assert_eq!(stats.timeslots.total, 0);
    }

    #[test]
    fn test_import_stats_accepts_timeslots_alias() {
        let stats: ImportStats = serde_json::from_value(json!({
            "rooms": 3, "instructors": 4, "courses": 5,
            "classes": 6, "students": 7, "timeslots": 8
        }))
        .unwrap();

        assert_eq!(stats.time_slots, 8);
        assert_eq!(stats.enrollments, None);
    }
}
