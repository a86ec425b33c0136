//! Operations shared by every catalog command

use super::finish;
use crate::api::{Editable, Resource, TimetableApi};
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::prompt::StdinConfirm;
use crate::render::{self, OutputFormat, Tabular};
use crate::views::{localize, DeleteOutcome, ListView};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn list<R, A>(api: &A, format: OutputFormat) -> Result<()>
where
    R: Resource + Tabular,
    A: TimetableApi,
{
    let mut view = ListView::<R>::new();
    with_spinner(R::LABELS.loading, view.load(api)).await;
    render::render_list(&view, format)?;
    finish(view.error())
}

pub async fn show<R, A>(api: &A, id: i64, format: OutputFormat) -> Result<()>
where
    R: Resource + Tabular,
    A: TimetableApi,
{
    match with_spinner(R::LABELS.loading, api.get::<R>(id)).await {
        Ok(record) => render::render_record(R::LABELS.title, &record, format),
        Err(err) => Err(CliError::view(localize(&err, R::LABELS.load_error))),
    }
}

/// Start from the default form, apply the given fields, POST, re-fetch
pub async fn create<R, A>(
    api: &A,
    fill: impl FnOnce(&mut R::Form),
    format: OutputFormat,
) -> Result<()>
where
    R: Editable + Tabular,
    A: TimetableApi,
{
    let mut form = R::Form::default();
    fill(&mut form);
    R::validate(&form)?;

    let mut view = ListView::<R>::new();
    with_spinner(R::LABELS.loading, view.create(api, &form)).await;
    render::render_list(&view, format)?;
    finish(view.error())
}

/// Pre-fill the form from the current record, apply the given fields, PUT,
/// re-fetch
pub async fn update<R, A>(
    api: &A,
    id: i64,
    fill: impl FnOnce(&mut R::Form),
    format: OutputFormat,
) -> Result<()>
where
    R: Editable + Tabular,
    A: TimetableApi,
{
    let current = with_spinner(R::LABELS.loading, api.get::<R>(id))
        .await
        .map_err(|err| CliError::view(localize(&err, R::LABELS.load_error)))?;

    let mut form = current.to_form();
    fill(&mut form);
    R::validate(&form)?;

    let mut view = ListView::<R>::new();
    with_spinner(R::LABELS.loading, view.update(api, id, &form)).await;
    render::render_list(&view, format)?;
    finish(view.error())
}

/// Show the collection, ask, and delete only on an explicit yes
pub async fn delete<R, A>(api: &A, id: i64, yes: bool, format: OutputFormat) -> Result<()>
where
    R: Editable + Tabular,
    A: TimetableApi,
{
    let mut view = ListView::<R>::new();
    if !with_spinner(R::LABELS.loading, view.load(api)).await {
        render::render_list(&view, format)?;
        return finish(view.error());
    }

    let mut confirm = StdinConfirm::new(yes);
    match view.delete(api, id, &mut confirm).await? {
        DeleteOutcome::Declined => {
            println!("Eliminación cancelada");
            Ok(())
        },
        DeleteOutcome::Deleted | DeleteOutcome::Failed => {
            render::render_list(&view, format)?;
            finish(view.error())
        },
    }
}

/// Nested list such as the classes of one instructor
pub async fn related<T, A>(
    api: &A,
    target: (&str, i64, &str),
    title: &str,
    empty: &str,
    load_error: &str,
    format: OutputFormat,
) -> Result<()>
where
    T: Tabular + Serialize + DeserializeOwned + Send + 'static,
    A: TimetableApi,
{
    let (resource, id, action) = target;
    match with_spinner("Cargando...", api.related::<T>(resource, id, action)).await {
        Ok(rows) => render::render_rows(title, &rows, empty, format),
        Err(err) => Err(CliError::view(localize(&err, load_error))),
    }
}

pub async fn statistics<T, A>(
    api: &A,
    resource: &str,
    title: &str,
    format: OutputFormat,
) -> Result<()>
where
    T: Serialize + DeserializeOwned + Send + 'static,
    A: TimetableApi,
{
    match with_spinner("Cargando estadísticas...", api.statistics::<T>(resource)).await {
        Ok(stats) => render::render_statistics(title, &stats, format),
        Err(err) => Err(CliError::view(localize(&err, "Error al cargar las estadísticas"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::types::{Instructor, Room, RoomStatistics, Student};
    use serde_json::json;

    fn rooms_api() -> FakeApi {
        FakeApi::new().with_rows(
            "rooms",
            json!([{"id": 1, "xml_id": 10, "capacity": 40, "location": "A-101", "is_constraint": false}]),
        )
    }

    #[tokio::test]
    async fn test_list_failure_is_an_error() {
        let api = FakeApi::new();
        api.fail("GET rooms");
        let err = list::<Room, _>(&api, OutputFormat::Json).await.unwrap_err();
        assert_eq!(err.to_string(), "Error al cargar las aulas");
    }

    #[tokio::test]
    async fn test_update_prefills_from_current_record() {
        let api = rooms_api();

        update::<Room, _>(&api, 1, |form| form.capacity = 55, OutputFormat::Json)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec!["GET rooms/1", "PUT rooms/1", "GET rooms"]);
        let rows = api.list::<Room>().await.unwrap();
        assert_eq!(rows[0].capacity, 55);
        assert_eq!(rows[0].location, "A-101");
    }

    #[tokio::test]
    async fn test_update_of_missing_record_sends_no_put() {
        let api = rooms_api();
        let result = update::<Room, _>(&api, 9, |form| form.capacity = 1, OutputFormat::Json).await;
        assert!(result.is_err());
        assert_eq!(api.count("PUT"), 0);
    }

    #[tokio::test]
    async fn test_create_with_defaults() {
        let api = FakeApi::new();
        create::<Instructor, _>(&api, |form| form.name = "Ana Vega".to_string(), OutputFormat::Json)
            .await
            .unwrap();

        let rows = api.list::<Instructor>().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ana Vega");
        assert_eq!(rows[0].xml_id, 0);
    }

    #[tokio::test]
    async fn test_create_without_name_sends_nothing() {
        let api = FakeApi::new();
        let err = create::<Instructor, _>(&api, |_| {}, OutputFormat::Json).await.unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "El nombre es obligatorio");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_blank_name_sends_no_put() {
        let api = FakeApi::new().with_rows(
            "students",
            json!([{"id": 3, "xml_id": 30, "name": "Luis", "email": null}]),
        );
        let err = update::<Student, _>(&api, 3, |form| form.name = " ".to_string(), OutputFormat::Json)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "El nombre es obligatorio");
        assert_eq!(api.calls(), vec!["GET students/3"]);
    }

    #[tokio::test]
    async fn test_delete_with_yes() {
        let api = rooms_api();
        delete::<Room, _>(&api, 1, true, OutputFormat::Json).await.unwrap();
        assert_eq!(api.count("DELETE rooms/1"), 1);
        assert!(api.list::<Room>().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_statistics_failure_is_localized() {
        let api = FakeApi::new();
        api.fail("GET rooms/statistics");
        let err = statistics::<RoomStatistics, _>(&api, "rooms", "Estadísticas", OutputFormat::Json)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error al cargar las estadísticas");
    }
}
