//! `ttadmin schedules` command implementation
//!
//! `show` is the day grid served by the timetable endpoint. `rooms` walks the
//! rooms one at a time; on a terminal the operator steps with a prompt.

use super::finish;
use crate::api::types::Schedule;
use crate::api::{Resource, TimetableApi};
use crate::error::{CliError, Result};
use crate::progress::with_spinner;
use crate::render::{self, OutputFormat};
use crate::views::schedule::{ASSIGNMENTS_LOADING, TIMETABLE_LOADING};
use crate::views::{localize, ListView, RoomPager, TimetableView};
use crate::ScheduleCommand;
use colored::Colorize;
use inquire::Select;
use std::io::IsTerminal;
use ttadmin_common::schedule::Weekday;

const NEXT_ROOM: &str = "Siguiente aula →";
const PREV_ROOM: &str = "← Aula anterior";
const QUIT: &str = "Salir";

pub async fn run<A: TimetableApi>(api: &A, command: &ScheduleCommand, format: OutputFormat) -> Result<()> {
    match command {
        ScheduleCommand::List => list(api, format).await,
        ScheduleCommand::Show { id, day } => show(api, *id, day.as_deref(), format).await,
        ScheduleCommand::Rooms { id, room, weekends } => rooms(api, *id, *room, *weekends, format).await,
        ScheduleCommand::Activate { id } => activate(api, *id, format).await,
    }
}

async fn list<A: TimetableApi>(api: &A, format: OutputFormat) -> Result<()> {
    let mut view = ListView::<Schedule>::new();
    with_spinner(Schedule::LABELS.loading, view.load(api)).await;
    render::render_schedules(&view, format)?;
    finish(view.error())
}

async fn show<A: TimetableApi>(api: &A, id: i64, day: Option<&str>, format: OutputFormat) -> Result<()> {
    let day = day.map(grid_day_name);
    let mut view = TimetableView::new();
    with_spinner(TIMETABLE_LOADING, view.load(api, id, day.as_deref())).await;
    render::render_timetable(&view, format)?;
    finish(view.error())
}

/// Grid keys are Spanish day names; accept any spelling `Weekday` parses
fn grid_day_name(day: &str) -> String {
    day.parse::<Weekday>()
        .map(|weekday| weekday.name().to_string())
        .unwrap_or_else(|_| day.to_string())
}

async fn rooms<A: TimetableApi>(
    api: &A,
    id: i64,
    start: usize,
    weekends: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut pager = RoomPager::new(id);
    with_spinner(ASSIGNMENTS_LOADING, pager.load(api, start)).await;
    render::render_room_pager(&pager, weekends, format)?;

    let interactive =
        format == OutputFormat::Table && std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if !interactive || pager.current_room().is_none() {
        return finish(pager.error());
    }

    loop {
        let mut options = Vec::new();
        if pager.has_next() {
            options.push(NEXT_ROOM);
        }
        if pager.has_prev() {
            options.push(PREV_ROOM);
        }
        if options.is_empty() {
            break;
        }
        options.push(QUIT);

        match Select::new("Navegar aulas:", options).prompt() {
            Ok(NEXT_ROOM) => {
                with_spinner(ASSIGNMENTS_LOADING, pager.next(api)).await;
            },
            Ok(PREV_ROOM) => {
                with_spinner(ASSIGNMENTS_LOADING, pager.prev(api)).await;
            },
            _ => break,
        }

        println!();
        render::render_room_pager(&pager, weekends, format)?;
        if let Some(error) = pager.error() {
            eprintln!("{} {}", "✗".red(), error.red());
        }
    }

    finish(pager.error())
}

async fn activate<A: TimetableApi>(api: &A, id: i64, format: OutputFormat) -> Result<()> {
    let response = with_spinner("Activando horario...", api.activate_schedule(id))
        .await
        .map_err(|err| CliError::view(localize(&err, "Error al activar el horario")))?;

    if format == OutputFormat::Table {
        render::print_notice(response.status.as_deref().unwrap_or("Horario activado"));
    }
    list(api, format).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use serde_json::json;

    #[test]
    fn test_grid_day_name() {
        assert_eq!(grid_day_name("monday"), "Lunes");
        assert_eq!(grid_day_name("3"), "Miércoles");
        assert_eq!(grid_day_name("Feriado"), "Feriado");
    }

    #[tokio::test]
    async fn test_activate_refetches_list() {
        let api = FakeApi::new().with_rows(
            "schedules",
            json!([{"id": 1, "name": "A", "is_active": true}, {"id": 2, "name": "B"}]),
        );

        run(&api, &ScheduleCommand::Activate { id: 2 }, OutputFormat::Json)
            .await
            .unwrap();

        assert_eq!(api.calls(), vec!["POST schedules/2/activate", "GET schedules"]);
        let rows = api.list::<Schedule>().await.unwrap();
        assert!(!rows[0].is_active);
        assert!(rows[1].is_active);
    }

    #[tokio::test]
    async fn test_activate_failure_skips_list() {
        let api = FakeApi::new();
        api.fail("POST schedules/2/activate");

        let err = run(&api, &ScheduleCommand::Activate { id: 2 }, OutputFormat::Json)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error al activar el horario");
        assert_eq!(api.count("GET"), 0);
    }

    #[tokio::test]
    async fn test_rooms_failure_exits_with_error() {
        let api = FakeApi::new();
        api.fail("GET rooms");

        let result = run(
            &api,
            &ScheduleCommand::Rooms { id: 1, room: 0, weekends: false },
            OutputFormat::Json,
        )
        .await;

        assert_eq!(result.unwrap_err().to_string(), "Error al cargar las aulas");
    }
}
