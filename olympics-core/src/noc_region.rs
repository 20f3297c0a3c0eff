use crate::error::Result;
use crate::table::HeaderIndex;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Table name used in schema errors.
pub const TABLE: &str = "noc_regions";

pub const REQUIRED_COLUMNS: [&str; 2] = ["NOC", "region"];
pub const OPTIONAL_COLUMNS: [&str; 1] = ["notes"];

/// Maps a National Olympic Committee code to a region name.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NocRegion {
    pub noc: String,
    /// Human-readable region; a handful of codes (e.g. refugee teams) have none
    pub region: Option<String>,
    pub notes: Option<String>,
}

impl NocRegion {
    /// Parse the region lookup from CSV text with a header row.
    ///
    /// Rows with an empty NOC code are skipped. Duplicate codes are returned
    /// as-is; the loader decides which entry wins.
    pub fn parse_csv(csv_object: &str) -> Result<Vec<NocRegion>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        if headers.is_empty() && csv_object.trim().is_empty() {
            return Ok(Vec::new());
        }
        let idx = HeaderIndex::new(TABLE, &headers, &REQUIRED_COLUMNS, &OPTIONAL_COLUMNS)?;

        let mut regions = Vec::new();
        let mut skipped = 0u32;
        for row in rdr.records() {
            let record = row?;
            let noc = idx.text(&record, "NOC");
            if noc.is_empty() {
                skipped += 1;
                continue;
            }
            regions.push(NocRegion {
                noc: noc.to_string(),
                region: idx.optional_text(&record, "region"),
                notes: idx.optional_text(&record, "notes"),
            });
        }
        log::info!(
            "[Olympics] parse: {} NOC regions, skipped {} without a code",
            regions.len(),
            skipped
        );
        Ok(regions)
    }
}
