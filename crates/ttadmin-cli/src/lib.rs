//! Timetable Admin CLI Library
//!
//! Command-line console for a course-timetabling REST server.
//!
//! # Overview
//!
//! - **Catalog management**: rooms, instructors and students (`ttadmin rooms list/create/update/delete`)
//! - **Read-only catalogs**: courses and classes with their related lists
//! - **Schedules**: generated timetables as a day grid or room by room (`ttadmin schedules show/rooms`)
//! - **Import**: upload a university XML export (`ttadmin import data.xml`)
//! - **Dashboard**: system-wide counters (`ttadmin dashboard`)
//! - **Configuration**: effective API settings (`ttadmin config`)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod views;

// Re-export commonly used types
pub use error::{CliError, Result};
pub use render::OutputFormat;

use api::types::{PersonForm, RoomForm};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// ttadmin - course timetabling administration console
#[derive(Parser, Debug)]
#[command(name = "ttadmin")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API base URL, e.g. http://localhost:8000/api
    #[arg(long, env = "TTADMIN_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage rooms
    Rooms {
        #[command(subcommand)]
        command: RoomCommand,
    },

    /// Manage instructors
    Instructors {
        #[command(subcommand)]
        command: InstructorCommand,
    },

    /// Manage students
    Students {
        #[command(subcommand)]
        command: StudentCommand,
    },

    /// Browse courses
    Courses {
        #[command(subcommand)]
        command: CourseCommand,
    },

    /// Browse classes
    Classes {
        #[command(subcommand)]
        command: ClassCommand,
    },

    /// Browse generated schedules
    Schedules {
        #[command(subcommand)]
        command: ScheduleCommand,
    },

    /// Import a university timetabling XML file
    Import {
        /// XML file to upload
        file: Option<PathBuf>,

        /// Keep the data already on the server instead of replacing it
        #[arg(long)]
        keep_existing: bool,
    },

    /// Show system statistics
    Dashboard,

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Room fields; anything left out keeps its current (or default) value
#[derive(Args, Debug, Clone, Default)]
pub struct RoomArgs {
    /// Identifier used by the XML import
    #[arg(long)]
    pub xml_id: Option<i64>,

    /// Seats
    #[arg(long)]
    pub capacity: Option<u32>,

    /// Building and room, e.g. "A-101"
    #[arg(long)]
    pub location: Option<String>,

    /// Mark the room as a constraint room
    #[arg(long)]
    pub constraint: Option<bool>,
}

/// Instructor and student fields
#[derive(Args, Debug, Clone, Default)]
pub struct PersonArgs {
    /// Identifier used by the XML import
    #[arg(long)]
    pub xml_id: Option<i64>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

impl RoomArgs {
    /// Overwrite only the fields given on the command line
    pub fn apply(&self, form: &mut RoomForm) {
        if let Some(xml_id) = self.xml_id {
            form.xml_id = xml_id;
        }
        if let Some(capacity) = self.capacity {
            form.capacity = capacity;
        }
        if let Some(location) = &self.location {
            form.location = location.clone();
        }
        if let Some(constraint) = self.constraint {
            form.is_constraint = constraint;
        }
    }
}

impl PersonArgs {
    pub fn apply(&self, form: &mut PersonForm) {
        if let Some(xml_id) = self.xml_id {
            form.xml_id = xml_id;
        }
        if let Some(name) = &self.name {
            form.name = name.clone();
        }
        if let Some(email) = &self.email {
            form.email = email.clone();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum RoomCommand {
    /// List all rooms
    List,

    /// Show one room
    Show { id: i64 },

    /// Create a room
    Create {
        #[command(flatten)]
        fields: RoomArgs,
    },

    /// Update a room
    Update {
        id: i64,

        #[command(flatten)]
        fields: RoomArgs,
    },

    /// Delete a room
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Room statistics
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum InstructorCommand {
    /// List all instructors
    List,

    /// Show one instructor
    Show { id: i64 },

    /// Create an instructor
    Create {
        #[command(flatten)]
        fields: PersonArgs,
    },

    /// Update an instructor
    Update {
        id: i64,

        #[command(flatten)]
        fields: PersonArgs,
    },

    /// Delete an instructor
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Classes taught by an instructor
    Classes { id: i64 },

    /// Instructor statistics
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// List all students
    List,

    /// Show one student
    Show { id: i64 },

    /// Create a student
    Create {
        #[command(flatten)]
        fields: PersonArgs,
    },

    /// Update a student
    Update {
        id: i64,

        #[command(flatten)]
        fields: PersonArgs,
    },

    /// Delete a student
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Enrollments of a student
    Classes { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    /// List all courses
    List,

    /// Show one course
    Show { id: i64 },

    /// Classes offered for a course
    Classes { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum ClassCommand {
    /// List all classes
    List,

    /// Show one class with its time slots
    Show { id: i64 },

    /// Students enrolled in a class
    Students { id: i64 },

    /// Class statistics
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// List generated schedules
    List,

    /// Show the day-by-day grid of a schedule
    Show {
        id: i64,

        /// Day tab to open (Lunes, monday, 1, ...); defaults to the first day
        #[arg(short, long)]
        day: Option<String>,
    },

    /// Show a schedule room by room
    Rooms {
        id: i64,

        /// Position of the room to open first, 0-based
        #[arg(long, default_value_t = 0)]
        room: usize,

        /// Include Saturday and Sunday
        #[arg(long)]
        weekends: bool,
    },

    /// Make a schedule the active one
    Activate { id: i64 },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get configuration value
    Get {
        /// Configuration key (api_url, timeout_secs, config_file)
        key: String,
    },

    /// Show all configuration
    Show,
}
