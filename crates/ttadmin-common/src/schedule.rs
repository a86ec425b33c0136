//! Schedule transforms used by the timetable viewers
//!
//! - [`decode_days`] turns the 7-character day mask into weekdays
//! - [`format_clock`] renders minutes from midnight as `HH:MM`
//! - [`calendar_events`] expands assignments into one event per active day
//! - [`AssignmentGrid`] pivots assignments into `weekday -> time label -> [..]`
//!
//! None of these fail: malformed masks yield fewer days, and empty input
//! yields empty output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::types::ClassAssignment;

/// Number of characters in a day mask
pub const DAYS_IN_MASK: usize = 7;

/// Day of the week, indexed as in the day mask (0 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_IN_MASK] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Monday first, the order used when rendering a week
    pub const WORK_WEEK_ORDER: [Weekday; DAYS_IN_MASK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Domingo",
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(index) = key.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| TimetableError::UnknownWeekday(s.to_string()));
        }

        let day = match key.as_str() {
            "domingo" | "sunday" | "sun" => Weekday::Sunday,
            "lunes" | "monday" | "mon" => Weekday::Monday,
            "martes" | "tuesday" | "tue" => Weekday::Tuesday,
            "miércoles" | "miercoles" | "wednesday" | "wed" => Weekday::Wednesday,
            "jueves" | "thursday" | "thu" => Weekday::Thursday,
            "viernes" | "friday" | "fri" => Weekday::Friday,
            "sábado" | "sabado" | "saturday" | "sat" => Weekday::Saturday,
            _ => return Err(TimetableError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

/// Decode a day mask.
///
/// Each of the first seven characters that is `'1'` yields the weekday at that
/// index; every other character is "not occupied". Characters past the
/// seventh are ignored.
pub fn decode_days(mask: &str) -> Vec<Weekday> {
    mask.chars()
        .take(DAYS_IN_MASK)
        .enumerate()
        .filter(|(_, bit)| *bit == '1')
        .filter_map(|(index, _)| Weekday::from_index(index))
        .collect()
}

/// Render minutes from midnight as zero-padded `HH:MM`.
///
/// Hours are not wrapped, so 1500 renders as `25:00`.
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Start and end clock times of an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSpan {
    pub start: String,
    pub end: String,
}

impl ClockSpan {
    pub fn new(start_time: u32, length: u32) -> Self {
        Self {
            start: format_clock(start_time),
            end: format_clock(start_time.saturating_add(length)),
        }
    }

    /// `HH:MM-HH:MM`, the key used by the grid pivot
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl From<&ClassAssignment> for ClockSpan {
    fn from(assignment: &ClassAssignment) -> Self {
        Self::new(assignment.start_time, assignment.length)
    }
}

/// One occurrence of an assignment on one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// `<assignment id>-<weekday index>`
    pub id: String,
    pub title: String,
    pub weekday: Weekday,
    pub start: String,
    pub end: String,
    pub class_id: i64,
    pub instructor: String,
    pub students: u32,
    pub conflict: bool,
}

/// Expand assignments into calendar events, one per active weekday.
///
/// Conflicting assignments are kept; `conflict` only drives presentation.
pub fn calendar_events(assignments: &[ClassAssignment]) -> Vec<CalendarEvent> {
    assignments
        .iter()
        .flat_map(|assignment| {
            let span = ClockSpan::from(assignment);
            let key = assignment.id.unwrap_or(assignment.class_id);
            decode_days(&assignment.days)
                .into_iter()
                .map(move |weekday| CalendarEvent {
                    id: format!("{}-{}", key, weekday.index()),
                    title: assignment.title(),
                    weekday,
                    start: span.start.clone(),
                    end: span.end.clone(),
                    class_id: assignment.class_id,
                    instructor: assignment.instructor_name.clone(),
                    students: assignment.student_count,
                    conflict: assignment.has_conflict,
                })
        })
        .collect()
}

/// Number of assignments flagged as conflicting
pub fn conflict_count(assignments: &[ClassAssignment]) -> usize {
    assignments.iter().filter(|a| a.has_conflict).count()
}

/// Assignments pivoted by weekday and time label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentGrid {
    days: BTreeMap<Weekday, BTreeMap<String, Vec<ClassAssignment>>>,
}

impl AssignmentGrid {
    /// Place every assignment under each of its active weekdays.
    ///
    /// Assignments with no active day do not appear.
    pub fn pivot(assignments: &[ClassAssignment]) -> Self {
        let mut days: BTreeMap<Weekday, BTreeMap<String, Vec<ClassAssignment>>> = BTreeMap::new();

        for assignment in assignments {
            let label = ClockSpan::from(assignment).label();
            for weekday in decode_days(&assignment.days) {
                days.entry(weekday)
                    .or_default()
                    .entry(label.clone())
                    .or_default()
                    .push(assignment.clone());
            }
        }

        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Occupied weekdays in index order
    pub fn weekdays(&self) -> Vec<Weekday> {
        self.days.keys().copied().collect()
    }

    /// Time cells of `weekday` in chronological order
    pub fn day(&self, weekday: Weekday) -> Option<&BTreeMap<String, Vec<ClassAssignment>>> {
        self.days.get(&weekday)
    }

    /// Look a day up by its display name
    pub fn day_by_name(&self, name: &str) -> Option<&BTreeMap<String, Vec<ClassAssignment>>> {
        name.parse::<Weekday>().ok().and_then(|weekday| self.day(weekday))
    }

    /// Placements on `weekday`
    pub fn count(&self, weekday: Weekday) -> usize {
        self.day(weekday)
            .map(|cells| cells.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Largest number of assignments sharing one cell
    pub fn max_concurrent(&self) -> usize {
        self.days
            .values()
            .flat_map(|cells| cells.values().map(Vec::len))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assignment(id: i64, days: &str, start_time: u32, length: u32, conflict: bool) -> ClassAssignment {
        ClassAssignment {
            id: Some(id),
            class_id: id * 10,
            class_name: Some(format!("Clase {}", id)),
            room_id: 1,
            instructor_name: "Prof. Vega".to_string(),
            days: days.to_string(),
            start_time,
            length,
            student_count: 20,
            has_conflict: conflict,
        }
    }

    #[test]
    fn test_decode_days_monday_tuesday() {
        let days = decode_days("0110000");
        assert_eq!(days, vec![Weekday::Monday, Weekday::Tuesday]);
        let indices: Vec<usize> = days.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_decode_days_edges() {
        assert!(decode_days("").is_empty());
        assert!(decode_days("0000000").is_empty());
        assert_eq!(decode_days("1"), vec![Weekday::Sunday]);
        assert_eq!(decode_days("00000011111"), vec![Weekday::Saturday]);
        assert_eq!(decode_days("x1?0000"), vec![Weekday::Monday]);
        assert_eq!(decode_days("1111111").len(), 7);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(165), "02:45");
        assert_eq!(format_clock(1439), "23:59");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn test_clock_span_start_90_length_75() {
        let span = ClockSpan::new(90, 75);
        assert_eq!(span.start, "01:30");
        assert_eq!(span.end, "02:45");
        assert_eq!(span.label(), "01:30-02:45");
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Lunes".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("miercoles".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("Sábado".parse::<Weekday>().unwrap(), Weekday::Saturday);
        assert_eq!("friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert_eq!("0".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("7".parse::<Weekday>().is_err());
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_calendar_events_one_per_active_day() {
        let events = calendar_events(&[assignment(4, "0101010", 480, 90, false)]);

        assert_eq!(events.len(), 3);
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["4-1", "4-3", "4-5"]);
        assert!(events.iter().all(|e| e.start == "08:00" && e.end == "09:30"));
        assert!(events.iter().all(|e| e.title == "Clase 4"));
    }

    #[test]
    fn test_calendar_events_keep_conflicts() {
        let assignments = vec![
            assignment(1, "0100000", 480, 60, true),
            assignment(2, "0100000", 480, 60, false),
        ];
        let events = calendar_events(&assignments);

        assert_eq!(events.len(), 2);
        assert_eq!(events.iter().filter(|e| e.conflict).count(), 1);
        assert_eq!(conflict_count(&assignments), 1);
    }

    #[test]
    fn test_calendar_events_without_id_use_class_id() {
        let mut a = assignment(1, "1000000", 60, 30, false);
        a.id = None;
        let events = calendar_events(&[a]);
        assert_eq!(events[0].id, "10-0");
    }

    #[test]
    fn test_grid_pivot() {
        let assignments = vec![
            assignment(1, "0110000", 600, 60, false),
            assignment(2, "0100000", 480, 60, false),
            assignment(3, "0100000", 480, 60, true),
            assignment(4, "0000000", 480, 60, false),
        ];
        let grid = AssignmentGrid::pivot(&assignments);

        assert_eq!(grid.weekdays(), vec![Weekday::Monday, Weekday::Tuesday]);
        let monday = grid.day_by_name("Lunes").unwrap();
        let labels: Vec<&String> = monday.keys().collect();
        assert_eq!(labels, vec!["08:00-09:00", "10:00-11:00"]);
        assert_eq!(monday["08:00-09:00"].len(), 2);
        assert_eq!(grid.count(Weekday::Monday), 3);
        assert_eq!(grid.count(Weekday::Tuesday), 1);
        assert_eq!(grid.count(Weekday::Friday), 0);
        assert_eq!(grid.max_concurrent(), 2);
    }

    #[test]
    fn test_grid_pivot_empty() {
        let grid = AssignmentGrid::pivot(&[]);
        assert!(grid.is_empty());
        assert!(grid.day(Weekday::Monday).is_none());
        assert_eq!(grid.max_concurrent(), 0);
    }

    proptest! {
        #[test]
        fn prop_decoded_days_match_set_bits(mask in "[01]{0,10}") {
            let decoded = decode_days(&mask);
            let expected: Vec<usize> = mask
                .chars()
                .take(DAYS_IN_MASK)
                .enumerate()
                .filter(|(_, c)| *c == '1')
                .map(|(i, _)| i)
                .collect();
            let actual: Vec<usize> = decoded.iter().map(|d| d.index()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_clock_span_round_trips_minutes(start in 0u32..2000, length in 0u32..600) {
            let span = ClockSpan::new(start, length);
            let parse = |s: &str| {
                let (h, m) = s.split_once(':').unwrap();
                h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
            };
            prop_assert_eq!(parse(&span.start), start);
            prop_assert_eq!(parse(&span.end), start + length);
        }
    }
}
