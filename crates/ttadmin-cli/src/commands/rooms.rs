//! `ttadmin rooms` command implementation

use super::crud;
use crate::api::types::{Room, RoomStatistics};
use crate::api::TimetableApi;
use crate::error::Result;
use crate::render::OutputFormat;
use crate::RoomCommand;

pub async fn run<A: TimetableApi>(api: &A, command: &RoomCommand, format: OutputFormat) -> Result<()> {
    match command {
        RoomCommand::List => crud::list::<Room, _>(api, format).await,
        RoomCommand::Show { id } => crud::show::<Room, _>(api, *id, format).await,
        RoomCommand::Create { fields } => {
            crud::create::<Room, _>(api, |form| fields.apply(form), format).await
        },
        RoomCommand::Update { id, fields } => {
            crud::update::<Room, _>(api, *id, |form| fields.apply(form), format).await
        },
        RoomCommand::Delete { id, yes } => crud::delete::<Room, _>(api, *id, *yes, format).await,
        RoomCommand::Stats => {
            crud::statistics::<RoomStatistics, _>(api, "rooms", "Estadísticas de Aulas", format).await
        },
    }
}
