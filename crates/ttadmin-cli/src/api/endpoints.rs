//! API endpoint URL builders
//!
//! Every path ends in `/`; the server redirects otherwise, which drops
//! request bodies. Ids are the local numeric ids, never `xml_id`.

/// `GET` list / `POST` create
pub fn collection_url(base_url: &str, resource: &str) -> String {
    format!("{}/{}/", base_url, resource)
}

/// `GET` / `PUT` / `DELETE` one record
pub fn item_url(base_url: &str, resource: &str, id: i64) -> String {
    format!("{}/{}/{}/", base_url, resource, id)
}

/// Nested route under one record, e.g. `/instructors/3/classes/`
pub fn item_action_url(base_url: &str, resource: &str, id: i64, action: &str) -> String {
    format!("{}/{}/{}/{}/", base_url, resource, id, action)
}

pub fn statistics_url(base_url: &str, resource: &str) -> String {
    format!("{}/{}/statistics/", base_url, resource)
}

pub fn import_xml_url(base_url: &str) -> String {
    format!("{}/import-xml/", base_url)
}

pub fn dashboard_stats_url(base_url: &str) -> String {
    format!("{}/dashboard-stats/", base_url)
}

pub fn room_assignments_url(base_url: &str, schedule_id: i64, room_id: i64) -> String {
    format!("{}/schedules/{}/room/{}/assignments/", base_url, schedule_id, room_id)
}

pub fn timetable_url(base_url: &str, schedule_id: i64) -> String {
    item_action_url(base_url, "schedules", schedule_id, "timetable")
}

pub fn activate_schedule_url(base_url: &str, schedule_id: i64) -> String {
    item_action_url(base_url, "schedules", schedule_id, "activate")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000/api";

    #[test]
    fn test_collection_and_item_urls() {
        assert_eq!(collection_url(BASE, "rooms"), "http://localhost:8000/api/rooms/");
        assert_eq!(item_url(BASE, "students", 42), "http://localhost:8000/api/students/42/");
        assert_eq!(
            item_action_url(BASE, "classes", 7, "students"),
            "http://localhost:8000/api/classes/7/students/"
        );
    }

    #[test]
    fn test_schedule_urls() {
        assert_eq!(
            room_assignments_url(BASE, 1, 12),
            "http://localhost:8000/api/schedules/1/room/12/assignments/"
        );
        assert_eq!(timetable_url(BASE, 3), "http://localhost:8000/api/schedules/3/timetable/");
        assert_eq!(
            activate_schedule_url(BASE, 3),
            "http://localhost:8000/api/schedules/3/activate/"
        );
    }

    #[test]
    fn test_singleton_urls() {
        assert_eq!(import_xml_url(BASE), "http://localhost:8000/api/import-xml/");
        assert_eq!(dashboard_stats_url(BASE), "http://localhost:8000/api/dashboard-stats/");
        assert_eq!(statistics_url(BASE, "rooms"), "http://localhost:8000/api/rooms/statistics/");
    }
}
