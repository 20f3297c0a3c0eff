//! Reading the source tables from disk.

use anyhow::Context;
use flate2::read::GzDecoder;
use log::info;
use olympics_db::Database;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a CSV file into memory, gunzipping it first when the path ends in `.gz`.
pub fn read_table(path: &Path) -> anyhow::Result<String> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut text = String::new();
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let read = if gzipped {
        GzDecoder::new(file).read_to_string(&mut text)
    } else {
        BufReader::new(file).read_to_string(&mut text)
    };
    read.with_context(|| format!("failed to read {}", path.display()))?;
    info!(
        "Read {} bytes from {}{}",
        text.len(),
        path.display(),
        if gzipped { " (gzip)" } else { "" }
    );
    Ok(text)
}

/// Read both tables and build the canonical table.
pub fn load_database(events: &Path, regions: &Path) -> anyhow::Result<Database> {
    let events_csv = read_table(events)?;
    let regions_csv = read_table(regions)?;
    let db = olympics_db::preprocess_csv(&events_csv, &regions_csv)
        .context("failed to preprocess the Olympic events tables")?;
    info!("Canonical table ready: {} rows", db.canonical_len()?);
    Ok(db)
}
