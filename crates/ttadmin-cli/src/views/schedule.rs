//! Schedule viewers
//!
//! - [`TimetableView`]: the server-pivoted grid of one schedule, one day at a time
//! - [`RoomPager`]: one room's weekly calendar, stepping through rooms in order

use super::localize;
use crate::api::{ClassAssignment, Resource, Room, TimetableApi, Timetable};
use ttadmin_common::schedule::{calendar_events, conflict_count, CalendarEvent};

pub const TIMETABLE_LOADING: &str = "Cargando horario...";
pub const TIMETABLE_ERROR: &str = "Error al cargar el horario";
pub const ASSIGNMENTS_LOADING: &str = "Cargando horarios...";
pub const ASSIGNMENTS_ERROR: &str = "Error al cargar las asignaciones";

// ============================================================================
// Grid mode
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TimetableView {
    timetable: Option<Timetable>,
    selected_day: Option<String>,
    error: Option<String>,
}

impl TimetableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timetable(&self) -> Option<&Timetable> {
        self.timetable.as_ref()
    }

    pub fn selected_day(&self) -> Option<&str> {
        self.selected_day.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the grid of `schedule_id` and select `day`, or the first day the
    /// server lists
    pub async fn load<A: TimetableApi>(&mut self, api: &A, schedule_id: i64, day: Option<&str>) -> bool {
        match api.timetable(schedule_id).await {
            Ok(timetable) => {
                self.selected_day = day.map(str::to_string).or_else(|| timetable.default_day());
                self.timetable = Some(timetable);
                self.error = None;
                true
            },
            Err(err) => {
                self.error = Some(localize(&err, TIMETABLE_ERROR));
                false
            },
        }
    }

    /// Switch tabs without re-fetching
    pub fn select_day(&mut self, day: &str) {
        self.selected_day = Some(day.to_string());
    }
}

// ============================================================================
// Room paging mode
// ============================================================================

#[derive(Debug, Clone)]
pub struct RoomPager {
    schedule_id: i64,
    rooms: Vec<Room>,
    index: usize,
    /// Set once the assignments of some room have been fetched
    loaded: bool,
    assignments: Vec<ClassAssignment>,
    error: Option<String>,
}

impl RoomPager {
    pub fn new(schedule_id: i64) -> Self {
        Self {
            schedule_id,
            rooms: Vec::new(),
            index: 0,
            loaded: false,
            assignments: Vec::new(),
            error: None,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The room whose assignments are shown; `None` until one has loaded
    pub fn current_room(&self) -> Option<&Room> {
        if !self.loaded {
            return None;
        }
        self.rooms.get(self.index)
    }

    pub fn assignments(&self) -> &[ClassAssignment] {
        &self.assignments
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        calendar_events(&self.assignments)
    }

    pub fn conflicts(&self) -> usize {
        conflict_count(&self.assignments)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_prev(&self) -> bool {
        self.loaded && self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.loaded && self.index + 1 < self.rooms.len()
    }

    /// Fetch the rooms, then the assignments of the room at `start`
    /// (clamped to the last room)
    pub async fn load<A: TimetableApi>(&mut self, api: &A, start: usize) -> bool {
        match api.list::<Room>().await {
            Ok(rooms) => {
                self.rooms = rooms;
                self.index = 0;
                self.loaded = false;
                self.assignments.clear();
                self.error = None;
            },
            Err(err) => {
                self.error = Some(localize(&err, Room::LABELS.load_error));
                return false;
            },
        }

        if self.rooms.is_empty() {
            return true;
        }

        let start = start.min(self.rooms.len() - 1);
        self.show(api, start).await
    }

    /// Step to the next room; a no-op on the last one
    pub async fn next<A: TimetableApi>(&mut self, api: &A) -> bool {
        if !self.has_next() {
            return false;
        }
        self.show(api, self.index + 1).await
    }

    /// Step to the previous room; a no-op on the first one
    pub async fn prev<A: TimetableApi>(&mut self, api: &A) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.show(api, self.index - 1).await
    }

    /// Fetch assignments for the room at `index`. On failure the pager stays
    /// on the previous room with its assignments.
    async fn show<A: TimetableApi>(&mut self, api: &A, index: usize) -> bool {
        let Some(room_id) = self.rooms.get(index).map(|room| room.id) else {
            return false;
        };

        match api.room_assignments(self.schedule_id, room_id).await {
            Ok(assignments) => {
                self.index = index;
                self.loaded = true;
                self.assignments = assignments;
                self.error = None;
                true
            },
            Err(err) => {
                self.error = Some(localize(&err, ASSIGNMENTS_ERROR));
                false
            },
        }
    }
}
