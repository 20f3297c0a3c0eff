use crate::error::Result;
use crate::medal::{Medal, Sex};
use crate::table::HeaderIndex;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Table name used in schema errors.
pub const TABLE: &str = "athlete_events";

/// Columns that must be present in the event table header.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "ID", "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "Season",
    "City", "Sport", "Event", "Medal",
];

/// One athlete's participation in one event at one Games.
///
/// Relay and team events produce one record per athlete, so several records
/// may describe the same medal-awarding outcome.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AthleteEvent {
    pub id: i32,
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    /// Height in centimetres
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    /// Games label, e.g. "1992 Summer"
    pub games: String,
    pub year: i32,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

impl AthleteEvent {
    /// Parse the event table from CSV text with a header row.
    ///
    /// Columns are located by name. Fails with a schema error if any of
    /// [`REQUIRED_COLUMNS`] is missing, or with an invalid-value error if
    /// `Year` is not an integer. An input without data rows parses to an
    /// empty vector.
    pub fn parse_csv(csv_object: &str) -> Result<Vec<AthleteEvent>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        if headers.is_empty() && csv_object.trim().is_empty() {
            return Ok(Vec::new());
        }
        let idx = HeaderIndex::new(TABLE, &headers, &REQUIRED_COLUMNS, &[])?;

        let mut events = Vec::new();
        for row in rdr.records() {
            let record = row?;
            let id = idx.required_i32(&record, "ID")?;
            let year = idx.required_i32(&record, "Year")?;
            events.push(AthleteEvent {
                id,
                name: idx.text(&record, "Name").to_string(),
                sex: idx.text(&record, "Sex").parse().ok(),
                age: idx.optional_f64(&record, "Age"),
                height: idx.optional_f64(&record, "Height"),
                weight: idx.optional_f64(&record, "Weight"),
                team: idx.text(&record, "Team").to_string(),
                noc: idx.text(&record, "NOC").to_string(),
                games: idx.text(&record, "Games").to_string(),
                year,
                season: idx.text(&record, "Season").to_string(),
                city: idx.text(&record, "City").to_string(),
                sport: idx.text(&record, "Sport").to_string(),
                event: idx.text(&record, "Event").to_string(),
                medal: Medal::parse_field(idx.text(&record, "Medal")),
            });
        }
        log::info!("[Olympics] parse: {} athlete event records", events.len());
        Ok(events)
    }
}
