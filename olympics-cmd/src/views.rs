//! Dispatch from a subcommand to its query and renderer.
//!
//! The "Overall" sentinel stops here: selections are turned into plain
//! `Option` filters before any query runs.

use crate::output::{write_heatmap, write_json, write_rows, OutputFormat};
use crate::Command;
use log::info;
use olympics_db::models::MedalTally;
use olympics_db::{Database, FAMOUS_SPORTS};
use serde::Serialize;
use std::io::Write;

/// One choice of a filter selector, as a CSV row.
#[derive(Debug, Serialize)]
struct OptionRow {
    filter: &'static str,
    value: String,
}

/// One age sample tagged with the group it belongs to.
#[derive(Debug, Serialize)]
struct AgeRow<'a> {
    group: &'a str,
    age: f64,
}

/// Run the query behind `command` and write its result to `out`.
pub fn render<W: Write>(
    db: &Database,
    command: Command,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Filters => {
            let options = db.country_year_list()?;
            match format {
                OutputFormat::Json => write_json(out, &options)?,
                OutputFormat::Csv => {
                    let rows: Vec<OptionRow> = options
                        .years
                        .iter()
                        .map(|y| OptionRow { filter: "year", value: y.to_string() })
                        .chain(options.countries.iter().map(|c| OptionRow {
                            filter: "country",
                            value: c.to_string(),
                        }))
                        .collect();
                    write_rows(out, format, &rows)?;
                }
            }
        }
        Command::Sports => {
            let sports: Vec<OptionRow> = db
                .sport_list()?
                .iter()
                .map(|s| OptionRow { filter: "sport", value: s.to_string() })
                .collect();
            write_rows(out, format, &sports)?;
        }
        Command::Tally { year, country } => {
            info!("Medal tally for year {} and country {}", year, country);
            let tally = db.fetch_medal_tally(year.into_option(), country.as_deref())?;
            if tally.is_empty() {
                info!("No medal tally rows for the selected filters");
            }
            match (&tally, format) {
                (_, OutputFormat::Json) => write_json(out, &tally)?,
                (MedalTally::Region(rows), OutputFormat::Csv) => write_rows(out, format, rows)?,
                (MedalTally::Year(rows), OutputFormat::Csv) => write_rows(out, format, rows)?,
            }
        }
        Command::Trend { column } => {
            write_rows(out, format, &db.data_over_time(column)?)?;
        }
        Command::EventsHeatmap => {
            write_heatmap(out, format, &db.events_heatmap()?)?;
        }
        Command::Stats => {
            write_rows(out, format, &[db.overall_stats()?])?;
        }
        Command::TopAthletes { sport } => {
            write_rows(out, format, &db.most_successful(sport.as_deref())?)?;
        }
        Command::CountryMedals { country } => {
            write_rows(out, format, &db.yearwise_medal_tally(&country)?)?;
        }
        Command::CountryHeatmap { country } => {
            write_heatmap(out, format, &db.country_event_heatmap(&country)?)?;
        }
        Command::CountryAthletes { country } => {
            write_rows(out, format, &db.most_successful_countrywise(&country)?)?;
        }
        Command::Physique { sport } => {
            write_rows(out, format, &db.weight_v_height(sport.as_deref())?)?;
        }
        Command::Gender => {
            write_rows(out, format, &db.men_vs_women()?)?;
        }
        Command::Ages => {
            let dist = db.age_distribution()?;
            match format {
                OutputFormat::Json => write_json(out, &dist)?,
                OutputFormat::Csv => {
                    let groups = [
                        ("Overall", &dist.overall),
                        ("Gold", &dist.gold),
                        ("Silver", &dist.silver),
                        ("Bronze", &dist.bronze),
                    ];
                    let rows: Vec<AgeRow> = groups
                        .iter()
                        .flat_map(|&(group, ages)| {
                            ages.iter().map(move |age| AgeRow { group, age: *age })
                        })
                        .collect();
                    write_rows(out, format, &rows)?;
                }
            }
        }
        Command::SportAges { sports } => {
            let sports: Vec<&str> = if sports.is_empty() {
                FAMOUS_SPORTS.to_vec()
            } else {
                sports.iter().map(String::as_str).collect()
            };
            let ages = db.gold_medal_ages_by_sport(&sports)?;
            match format {
                OutputFormat::Json => write_json(out, &ages)?,
                OutputFormat::Csv => {
                    let rows: Vec<AgeRow> = ages
                        .iter()
                        .flat_map(|s| {
                            s.ages.iter().map(move |age| AgeRow { group: &s.sport, age: *age })
                        })
                        .collect();
                    write_rows(out, format, &rows)?;
                }
            }
        }
        Command::Canonical => {
            write_rows(out, format, &db.canonical_table()?)?;
        }
    }
    Ok(())
}
