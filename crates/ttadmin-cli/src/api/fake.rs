//! In-memory [`TimetableApi`] used by view tests
//!
//! Records are stored as JSON per collection path. Every call is logged as
//! `"<METHOD> <path>"` so tests can assert that no request was sent.

use crate::api::client::TimetableApi;
use crate::api::resource::{Editable, Resource};
use crate::api::types::*;
use crate::error::{CliError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeApi {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    singletons: Mutex<HashMap<String, Value>>,
    failing: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
    next_id: Mutex<i64>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1000),
            ..Self::default()
        }
    }

    /// Seed a collection or nested list, e.g. `"rooms"` or `"schedules/1/room/2/assignments"`
    pub fn with_rows(self, path: &str, rows: Value) -> Self {
        let rows = match rows {
            Value::Array(items) => items,
            other => vec![other],
        };
        self.tables.lock().unwrap().insert(path.to_string(), rows);
        self
    }

    /// Seed a single-object response such as `"dashboard-stats"`
    pub fn with_object(self, path: &str, body: Value) -> Self {
        self.singletons.lock().unwrap().insert(path.to_string(), body);
        self
    }

    /// Make every call matching `"<METHOD> <path>"` fail with a bare 500
    pub fn fail(&self, call: &str) {
        self.failing.lock().unwrap().insert(call.to_string());
    }

    pub fn recover(&self, call: &str) {
        self.failing.lock().unwrap().remove(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.lock().unwrap().contains(&call) {
            return Err(CliError::status(500));
        }
        Ok(())
    }

    fn rows(&self, path: &str) -> Vec<Value> {
        self.tables.lock().unwrap().get(path).cloned().unwrap_or_default()
    }

    fn singleton<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.singletons.lock().unwrap().get(path).cloned().unwrap_or(json!({}));
        Ok(serde_json::from_value(body)?)
    }
}

fn id_of(row: &Value) -> i64 {
    row.get("id").and_then(Value::as_i64).unwrap_or_default()
}

fn not_found() -> CliError {
    CliError::api(404, "No encontrado.")
}

#[async_trait]
impl TimetableApi for FakeApi {
    async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        self.record(format!("GET {}", R::PATH))?;
        Ok(decode_list(Value::Array(self.rows(R::PATH)))?)
    }

    async fn get<R: Resource>(&self, id: i64) -> Result<R> {
        self.record(format!("GET {}/{}", R::PATH, id))?;
        let row = self.rows(R::PATH).into_iter().find(|r| id_of(r) == id).ok_or_else(not_found)?;
        Ok(serde_json::from_value(row)?)
    }

    async fn create<R: Editable>(&self, form: &R::Form) -> Result<R> {
        self.record(format!("POST {}", R::PATH))?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let mut row = serde_json::to_value(form)?;
        row["id"] = json!(id);
        self.tables
            .lock()
            .unwrap()
            .entry(R::PATH.to_string())
            .or_default()
            .push(row.clone());
        Ok(serde_json::from_value(row)?)
    }

    async fn update<R: Editable>(&self, id: i64, form: &R::Form) -> Result<R> {
        self.record(format!("PUT {}/{}", R::PATH, id))?;
        let mut tables = self.tables.lock().unwrap();
        let row = tables
            .get_mut(R::PATH)
            .and_then(|rows| rows.iter_mut().find(|r| id_of(r) == id))
            .ok_or_else(not_found)?;
        if let (Value::Object(target), Value::Object(fields)) = (&mut *row, serde_json::to_value(form)?) {
            target.extend(fields);
        }
        Ok(serde_json::from_value(row.clone())?)
    }

    async fn delete<R: Editable>(&self, id: i64) -> Result<()> {
        self.record(format!("DELETE {}/{}", R::PATH, id))?;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.get_mut(R::PATH).ok_or_else(not_found)?;
        let before = rows.len();
        rows.retain(|r| id_of(r) != id);
        if rows.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn related<T>(&self, resource: &str, id: i64, action: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = format!("{}/{}/{}", resource, id, action);
        self.record(format!("GET {}", path))?;
        Ok(decode_list(Value::Array(self.rows(&path)))?)
    }

    async fn statistics<T>(&self, resource: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = format!("{}/statistics", resource);
        self.record(format!("GET {}", path))?;
        self.singleton(&path)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.record("GET dashboard-stats".to_string())?;
        self.singleton("dashboard-stats")
    }

    async fn import_xml(
        &self,
        file_name: String,
        _contents: Vec<u8>,
        clear_existing: bool,
    ) -> Result<ImportResponse> {
        self.record("POST import-xml".to_string())?;
        let mut response: ImportResponse = self.singleton("import-xml")?;
        if response.message.is_none() {
            response.message = Some(format!("{} importado (clear_existing={})", file_name, clear_existing));
        }
        Ok(response)
    }

    async fn room_assignments(&self, schedule_id: i64, room_id: i64) -> Result<Vec<ClassAssignment>> {
        let path = format!("schedules/{}/room/{}/assignments", schedule_id, room_id);
        self.record(format!("GET {}", path))?;
        Ok(decode_list(Value::Array(self.rows(&path)))?)
    }

    async fn timetable(&self, schedule_id: i64) -> Result<Timetable> {
        let path = format!("schedules/{}/timetable", schedule_id);
        self.record(format!("GET {}", path))?;
        self.singleton(&path)
    }

    async fn activate_schedule(&self, schedule_id: i64) -> Result<ActivateResponse> {
        self.record(format!("POST schedules/{}/activate", schedule_id))?;
        let mut tables = self.tables.lock().unwrap();
        if let Some(rows) = tables.get_mut("schedules") {
            for row in rows.iter_mut() {
                let active = id_of(row) == schedule_id;
                row["is_active"] = json!(active);
            }
        }
        Ok(ActivateResponse {
            status: Some("Horario activado".to_string()),
        })
    }
}
