//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::model::HotelStatus;

/// Hotel profile management: spreadsheet import/export and room-type lookup
#[derive(Parser, Debug)]
#[command(name = "hotel-profile", version, about)]
pub struct Cli {
    /// Database URL, overrides config file and environment
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all hotels to an xlsx file
    Export {
        /// Copy the file here instead of leaving it in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a blank import template
    Template {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import hotels from an xlsx file
    Import {
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List room types of a hotel as JSON
    RoomTypes {
        #[arg(long)]
        hotel_id: Option<String>,
    },

    /// Browse and manage hotels
    Hotels {
        #[command(subcommand)]
        command: HotelsCommands,
    },

    /// Print the hotel and room-type status values with their labels as JSON
    Statuses,

    /// Insert demo hotels and room types
    Seed,
}

#[derive(Subcommand, Debug)]
pub enum HotelsCommands {
    /// List hotels
    List {
        #[arg(long)]
        status: Option<HotelStatus>,

        #[arg(long)]
        star_level: Option<i64>,

        /// Name substring
        #[arg(long)]
        name: Option<String>,
    },

    /// Change the status of a hotel
    SetStatus { id: i64, status: HotelStatus },
}

/// Dispatch a parsed command
pub async fn run(command: Commands, pool: &SqlitePool, config: &Config) -> Result<()> {
    match command {
        Commands::Export { output } => commands::transfer::handle_export(pool, config, output).await,
        Commands::Template { output } => commands::transfer::handle_template(pool, config, output),
        Commands::Import { file, json } => commands::transfer::handle_import(pool, config, &file, json).await,
        Commands::RoomTypes { hotel_id } => {
            commands::room_types::handle_room_types(pool, hotel_id.as_deref()).await
        }
        Commands::Hotels { command } => match command {
            HotelsCommands::List {
                status,
                star_level,
                name,
            } => commands::hotels::handle_list(pool, status, star_level, name.as_deref()).await,
            HotelsCommands::SetStatus { id, status } => {
                commands::hotels::handle_set_status(pool, id, status).await
            }
        },
        Commands::Statuses => commands::statuses::handle_statuses(),
        Commands::Seed => commands::seed::handle_seed(pool).await,
    }
}
