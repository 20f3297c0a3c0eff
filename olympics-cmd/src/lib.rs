//! Command implementations for the Olympics analysis CLI.
//!
//! Every subcommand renders one dashboard view: the data files are loaded
//! and preprocessed once, a single query runs, and its rows are written to
//! stdout as CSV or JSON.

use clap::{Args, Subcommand};
use olympics_core::Selection;
use olympics_db::models::TrendColumn;
use std::path::PathBuf;

pub mod input;
pub mod output;
pub mod views;

pub use output::OutputFormat;

/// Input files and output format shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Athlete events CSV (a `.gz` file is decompressed on the fly)
    #[arg(short = 'e', long, default_value = "athlete_events.csv", global = true)]
    pub events: PathBuf,

    /// NOC code to region lookup CSV
    #[arg(short = 'r', long, default_value = "noc_regions.csv", global = true)]
    pub regions: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "csv", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the year and country filter choices
    Filters,

    /// List the sport filter choices
    Sports,

    /// Medal tally by country, or by year when only a country is chosen
    Tally {
        /// Games year, or "Overall"
        #[arg(short = 'y', long, default_value = "Overall")]
        year: Selection<i32>,

        /// Region name, or "Overall"
        #[arg(short = 'c', long, default_value = "Overall")]
        country: Selection<String>,
    },

    /// Distinct nations, events or athletes per edition
    Trend {
        /// One of: region (nations), event, name (athletes), sport
        #[arg(long, default_value = "region")]
        column: TrendColumn,
    },

    /// Number of events per sport and year
    EventsHeatmap,

    /// Headline counts: editions, host cities, sports, events, athletes, nations
    Stats,

    /// Top 15 athletes by medals, optionally within one sport
    TopAthletes {
        /// Sport name, or "Overall"
        #[arg(short = 's', long, default_value = "Overall")]
        sport: Selection<String>,
    },

    /// Medals per year for one country
    CountryMedals {
        #[arg(short = 'c', long)]
        country: String,
    },

    /// Medals per sport and year for one country
    CountryHeatmap {
        #[arg(short = 'c', long)]
        country: String,
    },

    /// Top 10 athletes of one country
    CountryAthletes {
        #[arg(short = 'c', long)]
        country: String,
    },

    /// Height, weight and medal of each distinct athlete
    Physique {
        /// Sport name, or "Overall"
        #[arg(short = 's', long, default_value = "Overall")]
        sport: Selection<String>,
    },

    /// Distinct male and female athletes per year
    Gender,

    /// Ages of all athletes and of Gold, Silver and Bronze medallists
    Ages,

    /// Ages of Gold medallists per sport
    SportAges {
        /// Sport to include; repeatable. Defaults to 21 widely contested sports.
        #[arg(short = 's', long = "sport")]
        sports: Vec<String>,
    },

    /// Dump the preprocessed table
    Canonical,
}

/// Load the data files and render the requested view to stdout.
pub fn run(source: &SourceArgs, command: Command) -> anyhow::Result<()> {
    let db = input::load_database(&source.events, &source.regions)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    views::render(&db, command, source.format, &mut out)
}
