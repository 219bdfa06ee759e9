use crate::types::{ExportFormat, OutputFormat};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Plan a film festival from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.marquee", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Point the workspace at a festival programme and set up storage
    Init {
        #[arg(long)]
        catalog: PathBuf,

        #[arg(long, help = "Header line for exported shortlists")]
        share_header: Option<String>,
    },

    Film {
        #[command(subcommand)]
        command: FilmCommand,
    },

    /// Lay visible screenings out on the daily time grid
    Timetable {
        #[arg(long)]
        favorites_only: bool,

        #[arg(
            long,
            help = "Include industry and press & industry screenings (hidden by default)"
        )]
        show_industry: bool,

        #[arg(long)]
        selected_only: bool,

        #[arg(long, help = "Restrict output to one calendar day (YYYY-MM-DD)")]
        day: Option<NaiveDate>,
    },

    Favorite {
        #[command(subcommand)]
        command: FavoriteCommand,
    },

    Select {
        #[command(subcommand)]
        command: SelectCommand,
    },
}

#[derive(Subcommand)]
pub enum FilmCommand {
    /// Browse the catalog
    List {
        #[arg(long, help = "Case-insensitive match on title or description")]
        query: Option<String>,

        #[arg(long, help = "Keep only films in this programme strand")]
        programme: Option<String>,

        #[arg(long)]
        favorites_only: bool,
    },

    /// Full details for one film, screenings included
    Show { film_id: String },
}

#[derive(Subcommand)]
pub enum FavoriteCommand {
    /// The ranked shortlist, top pick first
    List,

    /// Add a film to the shortlist, or remove it if already there
    Toggle { film_id: String },

    /// Move a film to another film's rank, shifting the ones between
    Move {
        source_film_id: String,
        dest_film_id: String,
    },

    /// Write the ranked shortlist as shareable text or CSV
    Export {
        #[arg(id = "export_format", long = "format", default_value = "text")]
        format: ExportFormat,

        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SelectCommand {
    /// Selected screenings, in screening order
    List,

    /// Mark a screening as part of the plan, or unmark it
    Toggle { screening_id: String },
}
