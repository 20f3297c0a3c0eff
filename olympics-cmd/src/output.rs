//! Rendering query results as CSV or JSON.

use clap::ValueEnum;
use olympics_db::models::Heatmap;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Write a table of rows. CSV headers come from the row's field names.
pub fn write_rows<W: Write, T: Serialize>(
    out: &mut W,
    format: OutputFormat,
    rows: &[T],
) -> anyhow::Result<()> {
    if rows.is_empty() {
        log::info!("View is empty, nothing to show");
    }
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => write_json(out, &rows)?,
    }
    Ok(())
}

/// Pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// A heatmap as CSV has one row per sport and one column per year; as
/// JSON it keeps its `sports`/`years`/`counts` shape.
pub fn write_heatmap<W: Write>(
    out: &mut W,
    format: OutputFormat,
    map: &Heatmap,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, map)?,
        OutputFormat::Csv => {
            if map.is_empty() {
                log::info!("Heatmap is empty, nothing to show");
                return Ok(());
            }
            let mut wtr = csv::Writer::from_writer(&mut *out);
            let mut header = vec!["sport".to_string()];
            header.extend(map.years.iter().map(|y| y.to_string()));
            wtr.write_record(&header)?;
            for (sport, counts) in map.sports.iter().zip(&map.counts) {
                let mut record = vec![sport.clone()];
                record.extend(counts.iter().map(|c| c.to_string()));
                wtr.write_record(&record)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
