//! HTTP API client for the timetabling server
//!
//! Views talk to [`TimetableApi`]; [`ApiClient`] is the reqwest-backed
//! implementation. Requests carry no auth, no retries and no caching.

use crate::api::endpoints;
use crate::api::resource::{Editable, Resource};
use crate::api::types::*;
use crate::config::Config;
use crate::error::{CliError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Operations the console performs against the REST API
#[async_trait]
pub trait TimetableApi: Send + Sync {
    /// `GET /{resource}/`, bare array or `{results: [...]}`
    async fn list<R: Resource>(&self) -> Result<Vec<R>>;

    async fn get<R: Resource>(&self, id: i64) -> Result<R>;

    async fn create<R: Editable>(&self, form: &R::Form) -> Result<R>;

    async fn update<R: Editable>(&self, id: i64, form: &R::Form) -> Result<R>;

    async fn delete<R: Editable>(&self, id: i64) -> Result<()>;

    /// Nested list such as `GET /instructors/{id}/classes/`
    async fn related<T>(&self, resource: &str, id: i64, action: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static;

    /// `GET /{resource}/statistics/`
    async fn statistics<T>(&self, resource: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;

    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// Multipart upload of one XML document
    async fn import_xml(
        &self,
        file_name: String,
        contents: Vec<u8>,
        clear_existing: bool,
    ) -> Result<ImportResponse>;

    async fn room_assignments(&self, schedule_id: i64, room_id: i64) -> Result<Vec<ClassAssignment>>;

    async fn timetable(&self, schedule_id: i64) -> Result<Timetable>;

    async fn activate_schedule(&self, schedule_id: i64) -> Result<ActivateResponse>;
}

/// reqwest implementation of [`TimetableApi`]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ttadmin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send and turn a non-success status into [`CliError::Api`]
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServerErrorBody>(&body)
            .ok()
            .and_then(ServerErrorBody::into_message);

        debug!(status = status.as_u16(), message = ?message, "API request failed");
        Err(CliError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "GET");
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let body: serde_json::Value = self.get_json(url).await?;
        Ok(decode_list(body)?)
    }
}

#[async_trait]
impl TimetableApi for ApiClient {
    async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        self.get_list(&endpoints::collection_url(&self.base_url, R::PATH)).await
    }

    async fn get<R: Resource>(&self, id: i64) -> Result<R> {
        self.get_json(&endpoints::item_url(&self.base_url, R::PATH, id)).await
    }

    async fn create<R: Editable>(&self, form: &R::Form) -> Result<R> {
        let url = endpoints::collection_url(&self.base_url, R::PATH);
        debug!(url = %url, form = ?form, "POST");
        let response = self.send(self.client.post(&url).json(form)).await?;
        Ok(response.json().await?)
    }

    async fn update<R: Editable>(&self, id: i64, form: &R::Form) -> Result<R> {
        let url = endpoints::item_url(&self.base_url, R::PATH, id);
        debug!(url = %url, form = ?form, "PUT");
        let response = self.send(self.client.put(&url).json(form)).await?;
        Ok(response.json().await?)
    }

    async fn delete<R: Editable>(&self, id: i64) -> Result<()> {
        let url = endpoints::item_url(&self.base_url, R::PATH, id);
        debug!(url = %url, "DELETE");
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }

    async fn related<T>(&self, resource: &str, id: i64, action: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.get_list(&endpoints::item_action_url(&self.base_url, resource, id, action))
            .await
    }

    async fn statistics<T>(&self, resource: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.get_json(&endpoints::statistics_url(&self.base_url, resource)).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_json(&endpoints::dashboard_stats_url(&self.base_url)).await
    }

    async fn import_xml(
        &self,
        file_name: String,
        contents: Vec<u8>,
        clear_existing: bool,
    ) -> Result<ImportResponse> {
        let url = endpoints::import_xml_url(&self.base_url);
        debug!(url = %url, file = %file_name, bytes = contents.len(), clear_existing, "POST multipart");

        let part = Part::bytes(contents)
            .file_name(file_name)
            .mime_str("application/xml")?;
        let form = Form::new()
            .part("file", part)
            .text("clear_existing", if clear_existing { "true" } else { "false" });

        let response = self.send(self.client.post(&url).multipart(form)).await?;
        let status = response.status().as_u16();
        let body: ImportResponse = response.json().await?;

        if !body.success {
            return Err(CliError::Api {
                status,
                message: body.error.clone().or_else(|| body.message.clone()),
            });
        }

        Ok(body)
    }

    async fn room_assignments(&self, schedule_id: i64, room_id: i64) -> Result<Vec<ClassAssignment>> {
        self.get_list(&endpoints::room_assignments_url(&self.base_url, schedule_id, room_id))
            .await
    }

    async fn timetable(&self, schedule_id: i64) -> Result<Timetable> {
        self.get_json(&endpoints::timetable_url(&self.base_url, schedule_id)).await
    }

    async fn activate_schedule(&self, schedule_id: i64) -> Result<ActivateResponse> {
        let url = endpoints::activate_schedule_url(&self.base_url, schedule_id);
        debug!(url = %url, "POST");
        let response = self.send(self.client.post(&url)).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/api/", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_list_accepts_both_shapes() {
        let server = MockServer::start().await;
        let rows = json!([{"id": 1, "xml_id": 10, "capacity": 30, "location": "A-1"}]);

        Mock::given(method("GET"))
            .and(path("/api/rooms/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rows.clone()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/students/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1, "results": [{"id": 9, "xml_id": 90, "name": "Ana"}]
            })))
            .mount(&server)
            .await;

        let api = client(&server);
        let rooms: Vec<Room> = api.list().await.unwrap();
        let students: Vec<Student> = api.list().await.unwrap();

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].location, "A-1");
        assert_eq!(students[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_create_posts_form() {
        let server = MockServer::start().await;
        let form = RoomForm {
            xml_id: 5,
            capacity: 40,
            location: "B-2".to_string(),
            is_constraint: false,
        };

        Mock::given(method("POST"))
            .and(path("/api/rooms/"))
            .and(body_json(json!({"xml_id": 5, "capacity": 40, "location": "B-2", "is_constraint": false})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11, "xml_id": 5, "capacity": 40, "location": "B-2", "is_constraint": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created: Room = client(&server).create::<Room>(&form).await.unwrap();
        assert_eq!(created.id, 11);
    }

    #[tokio::test]
    async fn test_error_body_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/rooms/3/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "No encontrado."})),
            )
            .mount(&server)
            .await;

        let err = client(&server).delete::<Room>(3).await.unwrap_err();
        match err {
            CliError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message.as_deref(), Some("No encontrado."));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_unsuccessful_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/import-xml/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false, "error": "XML mal formado"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .import_xml("data.xml".to_string(), b"<x/>".to_vec(), true)
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("XML mal formado"));
    }

    #[tokio::test]
    async fn test_room_assignments_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedules/2/room/7/assignments/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"class_id": 1, "room_id": 7, "instructor_name": "X", "days": "0100000",
                 "start_time": 480, "length": 60, "student_count": 12, "has_conflict": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let rows = client(&server).room_assignments(2, 7).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].has_conflict);
    }
}
