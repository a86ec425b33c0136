//! Terminal rendering of view state
//!
//! Tables go to stdout through `comfy-table`; `--format json` prints the same
//! data as pretty JSON instead. Errors are not printed here: commands return
//! them and `main` reports them on stderr.

use crate::api::types::*;
use crate::api::Resource;
use crate::error::Result;
use crate::views::{DashboardView, ImportView, ListView, RoomPager, TimetableView};
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;
use ttadmin_common::schedule::{decode_days, AssignmentGrid, CalendarEvent, ClockSpan, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A record that renders as one table row and as a key/value detail table
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
    fn fields(&self) -> Vec<(&'static str, String)>;
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn yes_no(value: bool) -> String {
    let label = if value { "Sí" } else { "No" };
    label.to_string()
}

/// Rows of `rows`, or a single row holding `empty`
pub fn list_table<T: Tabular>(rows: &[T], empty: &str) -> Table {
    let mut table = new_table();
    let headers = T::headers();
    let width = headers.len();
    table.set_header(headers);

    if rows.is_empty() {
        let mut row = vec![empty.to_string()];
        row.resize(width, String::new());
        table.add_row(row);
    } else {
        for row in rows {
            table.add_row(row.cells());
        }
    }
    table
}

pub fn detail_table(fields: &[(&str, String)]) -> Table {
    let mut table = new_table();
    for (key, value) in fields {
        table.add_row(vec![key.to_string(), value.clone()]);
    }
    table
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_title(title: &str) {
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(title.chars().count()));
}

pub fn print_notice(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message.yellow());
}

// ============================================================================
// Record tables
// ============================================================================

impl Tabular for Room {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ID XML", "Capacidad", "Ubicación", "Restricción"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.xml_id.to_string(),
            self.capacity.to_string(),
            or_dash(Some(self.location.as_str())),
            yes_no(self.is_constraint),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::headers().into_iter().zip(self.cells()).collect()
    }
}

impl Tabular for Instructor {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ID XML", "Nombre", "Email", "Clases"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.xml_id.to_string(),
            self.name.clone(),
            or_dash(self.email.as_deref()),
            self.class_count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::headers().into_iter().zip(self.cells()).collect()
    }
}

impl Tabular for Student {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ID XML", "Nombre", "Email", "Clases inscritas"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.xml_id.to_string(),
            self.name.clone(),
            or_dash(self.email.as_deref()),
            self.enrolled_classes_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::headers().into_iter().zip(self.cells()).collect()
    }
}

impl Tabular for Course {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ID XML", "Código", "Nombre", "Clases"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.xml_id.to_string(),
            or_dash(Some(self.code.as_str())),
            or_dash(Some(self.name.as_str())),
            self.class_count.unwrap_or(0).to_string(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::headers().into_iter().zip(self.cells()).collect()
    }
}

/// `Lun, Mié 08:00-09:30`
pub fn time_slot_label(slot: &TimeSlot) -> String {
    let days: Vec<&str> = decode_days(&slot.days)
        .into_iter()
        .map(short_day)
        .collect();
    let span = match (&slot.start_time_formatted, &slot.end_time_formatted) {
        (Some(start), Some(end)) => format!("{}-{}", start, end),
        _ => ClockSpan::new(slot.start_time, slot.length).label(),
    };
    if days.is_empty() {
        span
    } else {
        format!("{} {}", days.join(", "), span)
    }
}

fn short_day(day: Weekday) -> &'static str {
    match day {
        Weekday::Sunday => "Dom",
        Weekday::Monday => "Lun",
        Weekday::Tuesday => "Mar",
        Weekday::Wednesday => "Mié",
        Weekday::Thursday => "Jue",
        Weekday::Friday => "Vie",
        Weekday::Saturday => "Sáb",
    }
}

fn committed_label(committed: bool) -> String {
    let label = if committed { "Comprometida" } else { "Pendiente" };
    label.to_string()
}

impl Tabular for Class {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ID XML", "Curso", "Límite", "Instructores", "Aulas", "Horarios", "Estado"]
    }

    fn cells(&self) -> Vec<String> {
        let slots: Vec<String> = self.time_slots.iter().map(time_slot_label).collect();
        vec![
            self.id.to_string(),
            self.xml_id.to_string(),
            self.offering_name.clone().unwrap_or_else(|| "Sin curso".to_string()),
            self.class_limit.to_string(),
            join_or_dash(&self.instructor_names),
            join_or_dash(&self.room_names),
            join_or_dash(&slots),
            committed_label(self.committed),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> =
            Self::headers().into_iter().zip(self.cells()).collect();
        fields.push(("Fechas", or_dash(self.dates.as_deref())));
        fields.push((
            "Estudiantes",
            self.student_count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
        ));
        fields
    }
}

impl Tabular for Schedule {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Nombre", "Descripción", "Fitness Score", "Asignaciones", "Estado", "Creado"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_dash(Some(self.description.as_str())),
            format!("{:.2}", self.fitness_score),
            self.assignment_count.unwrap_or(0).to_string(),
            if self.is_active { "Activo" } else { "Inactivo" }.to_string(),
            self.created_display(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> =
            Self::headers().into_iter().zip(self.cells()).collect();
        fields.push(("Actualizado", or_dash(self.updated_at.as_deref())));
        fields
    }
}

impl Tabular for StudentClass {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Estudiante", "Clase"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.student_name.clone().unwrap_or_else(|| self.student.to_string()),
            self.class_info.clone().unwrap_or_else(|| self.class_obj.to_string()),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        Self::headers().into_iter().zip(self.cells()).collect()
    }
}

// ============================================================================
// Views
// ============================================================================

pub fn render_list<R: Resource + Tabular>(view: &ListView<R>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(view.rows());
    }

    print_title(R::LABELS.title);
    if let Some(notice) = view.notice() {
        print_notice(notice);
    }
    if view.error().is_none() || !view.rows().is_empty() {
        println!("{}", list_table(view.rows(), R::LABELS.empty));
    }
    Ok(())
}

/// Rows of a related or read-only list that has no view of its own
pub fn render_rows<T: Tabular + Serialize>(
    title: &str,
    rows: &[T],
    empty: &str,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(rows);
    }
    print_title(title);
    println!("{}", list_table(rows, empty));
    Ok(())
}

pub fn render_record<T: Tabular + Serialize>(title: &str, record: &T, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(record);
    }
    print_title(title);
    println!("{}", detail_table(&record.fields()));
    Ok(())
}

pub fn render_schedules(view: &ListView<Schedule>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json || !view.rows().is_empty() || view.error().is_some() {
        return render_list(view, format);
    }

    print_title(Schedule::LABELS.title);
    println!("{}", Schedule::LABELS.empty.bold());
    println!("Los horarios se generarán mediante el algoritmo genético.");
    println!("Esta funcionalidad estará disponible próximamente.");
    print_warning("Módulo de generación en desarrollo");
    Ok(())
}

pub fn render_dashboard(view: &DashboardView, format: OutputFormat) -> Result<()> {
    let Some(stats) = view.stats() else {
        return Ok(());
    };
    if format == OutputFormat::Json {
        return print_json(stats);
    }

    print_title("Dashboard del Sistema");

    let mut table = new_table();
    table.set_header(vec!["", "Total", "Detalle"]);
    table.add_row(vec![
        "Aulas".to_string(),
        stats.rooms.total.to_string(),
        format!(
            "Capacidad promedio: {:.0} | Con restricciones: {}",
            stats.rooms.avg_capacity, stats.rooms.with_constraints
        ),
    ]);
    table.add_row(vec![
        "Instructores".to_string(),
        stats.instructors.total.to_string(),
        format!("Con clases asignadas: {}", stats.instructors.with_classes),
    ]);
    table.add_row(vec![
        "Cursos".to_string(),
        stats.courses.total.to_string(),
        format!("Con clases: {}", stats.courses.with_classes),
    ]);
    table.add_row(vec![
        "Clases".to_string(),
        stats.classes.total.to_string(),
        format!(
            "Comprometidas: {} | Con instructor: {} | Límite promedio: {:.0}",
            stats.classes.committed, stats.classes.with_instructor, stats.classes.avg_limit
        ),
    ]);
    table.add_row(vec![
        "Estudiantes".to_string(),
        stats.students.total.to_string(),
        format!("Inscritos: {}", stats.students.enrolled),
    ]);
    table.add_row(vec![
        "Slots de Tiempo".to_string(),
        stats.timeslots.total.to_string(),
        "Horarios disponibles".to_string(),
    ]);
    println!("{}", table);

    println!();
    println!("{}", "Resumen del Sistema".bold());
    println!(
        "El sistema cuenta con {} clases distribuidas en {} cursos diferentes.",
        stats.classes.total, stats.courses.total
    );
    println!(
        "Hay {} instructores registrados, de los cuales {} tienen clases asignadas.",
        stats.instructors.total, stats.instructors.with_classes
    );
    println!(
        "Se dispone de {} aulas con una capacidad promedio de {:.0} estudiantes.",
        stats.rooms.total, stats.rooms.avg_capacity
    );
    println!(
        "El sistema gestiona {} estudiantes, de los cuales {} están inscritos en clases.",
        stats.students.total, stats.students.enrolled
    );
    Ok(())
}

pub fn render_import(view: &ImportView, format: OutputFormat) -> Result<()> {
    let Some(response) = view.result() else {
        return Ok(());
    };
    if format == OutputFormat::Json {
        return print_json(response);
    }

    print_notice("Importación exitosa!");
    if let Some(message) = response.message.as_deref().filter(|m| !m.trim().is_empty()) {
        println!("{}", message);
    }

    let stats = &response.stats;
    let mut table = new_table();
    table.set_header(vec!["Entidad", "Importados"]);
    table.add_row(vec!["Aulas".to_string(), stats.rooms.to_string()]);
    table.add_row(vec!["Instructores".to_string(), stats.instructors.to_string()]);
    table.add_row(vec!["Cursos".to_string(), stats.courses.to_string()]);
    table.add_row(vec!["Clases".to_string(), stats.classes.to_string()]);
    table.add_row(vec!["Estudiantes".to_string(), stats.students.to_string()]);
    table.add_row(vec!["Slots de Tiempo".to_string(), stats.time_slots.to_string()]);
    if let Some(enrollments) = stats.enrollments {
        table.add_row(vec!["Inscripciones".to_string(), enrollments.to_string()]);
    }
    println!("{}", table);
    Ok(())
}

pub fn render_timetable(view: &TimetableView, format: OutputFormat) -> Result<()> {
    let Some(timetable) = view.timetable() else {
        return Ok(());
    };
    if format == OutputFormat::Json {
        return print_json(timetable);
    }

    let schedule = &timetable.schedule;
    print_title(&format!("Horario: {}", schedule.name));
    if !schedule.description.trim().is_empty() {
        println!("{}", schedule.description);
    }

    let days = timetable.day_names();
    let mut header = new_table();
    header.set_header(vec![
        "Fitness Score",
        "Total Clases",
        "Asignaciones",
        "Clases Simultáneas (máx)",
        "Días",
    ]);
    header.add_row(vec![
        format!("{:.2}", schedule.fitness_score),
        timetable.stats.total_classes.to_string(),
        schedule.total_assignments.to_string(),
        timetable.stats.max_concurrent_classes.to_string(),
        days.len().to_string(),
    ]);
    println!("{}", header);

    if timetable.stats.needs_multiple_views {
        print_warning("Hay muchas clases simultáneas; revisa cada día por separado.");
    }

    if timetable.is_empty() {
        println!("{}", "No hay clases programadas en este horario".bold());
        return Ok(());
    }

    let selected = view.selected_day().unwrap_or_default();
    let tabs: Vec<String> = days
        .iter()
        .map(|day| {
            let tab = format!("{} ({})", day, timetable.classes_on(day));
            if day.as_str() == selected {
                format!("[{}]", tab).bold().to_string()
            } else {
                tab
            }
        })
        .collect();
    println!("{}", tabs.join("  "));
    println!();

    let cells = timetable.day_cells(selected);
    if cells.is_empty() {
        println!("No hay clases programadas para {}", selected);
        return Ok(());
    }

    let mut grid = new_table();
    grid.set_header(vec!["Horario", "Clase", "Código", "Aula", "Instructores", "Estudiantes"]);
    for (label, classes) in cells {
        for (i, class) in classes.iter().enumerate() {
            let slot = if i == 0 { label.to_string() } else { String::new() };
            let occupancy = format!("{}/{}", class.students, class.room_capacity);
            let occupancy = if class.room_capacity > 0 && class.students > class.room_capacity {
                Cell::new(format!("{} ⚠ Excede capacidad del aula", occupancy)).fg(Color::Red)
            } else {
                Cell::new(occupancy)
            };
            grid.add_row(vec![
                Cell::new(slot),
                Cell::new(&class.name),
                Cell::new(or_dash(Some(class.code.as_str()))),
                Cell::new(or_dash(Some(class.room.as_str()))),
                Cell::new(join_or_dash(&class.instructors)),
                occupancy,
            ]);
        }
    }
    println!("{}", grid);
    Ok(())
}

#[derive(Serialize)]
struct RoomCalendar<'a> {
    room: Option<&'a Room>,
    index: usize,
    total_rooms: usize,
    conflicts: usize,
    events: Vec<CalendarEvent>,
}

pub fn render_room_pager(pager: &RoomPager, weekends: bool, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&RoomCalendar {
            room: pager.current_room(),
            index: pager.index(),
            total_rooms: pager.rooms().len(),
            conflicts: pager.conflicts(),
            events: pager.events(),
        });
    }

    let Some(room) = pager.current_room() else {
        if pager.error().is_none() && pager.rooms().is_empty() {
            println!("{}", Room::LABELS.empty);
        }
        return Ok(());
    };

    print_title(&format!(
        "Horario Semanal del Aula: {} ({}/{})",
        room.label(),
        pager.index() + 1,
        pager.rooms().len()
    ));

    let mut header = new_table();
    header.set_header(vec!["Capacidad", "Clases Asignadas", "Conflictos"]);
    header.add_row(vec![
        room.capacity.to_string(),
        pager.assignments().len().to_string(),
        pager.conflicts().to_string(),
    ]);
    println!("{}", header);

    if pager.conflicts() > 0 {
        print_warning(&format!("{} conflicto(s) detectado(s) en esta aula", pager.conflicts()));
    }

    let grid = AssignmentGrid::pivot(pager.assignments());
    let mut table = new_table();
    table.set_header(vec!["Día", "Horario", "Clase", "Instructor", "Estudiantes", "Conflicto"]);
    let mut shown = 0;
    for day in Weekday::WORK_WEEK_ORDER {
        if day.is_weekend() && !weekends {
            continue;
        }
        let Some(cells) = grid.day(day) else {
            continue;
        };
        for (label, assignments) in cells {
            for assignment in assignments {
                let color = if assignment.has_conflict { Color::Red } else { Color::Blue };
                table.add_row(vec![
                    Cell::new(day.name()),
                    Cell::new(label),
                    Cell::new(assignment.title()).fg(color),
                    Cell::new(or_dash(Some(assignment.instructor_name.as_str()))),
                    Cell::new(assignment.student_count),
                    Cell::new(if assignment.has_conflict { "SÍ ⚠" } else { "No" }).fg(color),
                ]);
                shown += 1;
            }
        }
    }

    if shown == 0 {
        println!("No hay clases asignadas a esta aula");
    } else {
        println!("{}", table);
        println!("Leyenda: {} Sin conflictos  {} Con conflictos", "■".blue(), "■".red());
    }
    Ok(())
}

/// Statistics endpoints return flat objects; show them as key/value rows
pub fn render_statistics<T: Serialize>(title: &str, stats: &T, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(stats);
    }

    print_title(title);
    let mut table = new_table();
    if let serde_json::Value::Object(map) = serde_json::to_value(stats)? {
        for (key, value) in map {
            let shown = match value {
                serde_json::Value::Number(n) if n.is_f64() => {
                    format!("{:.2}", n.as_f64().unwrap_or_default())
                },
                other => other.to_string(),
            };
            table.add_row(vec![key.replace('_', " "), shown]);
        }
    }
    println!("{}", table);
    Ok(())
}
