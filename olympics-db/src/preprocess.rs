//! One-time construction of the canonical `athletes` table.

use crate::models::CanonicalRecord;
use crate::{Database, Result};
use olympics_core::{AthleteEvent, NocRegion};

/// The only season kept in the canonical table.
pub const SUMMER: &str = "Summer";

/// Join event records onto the region lookup and keep Summer participations.
///
/// Every Summer record survives, in source order, with `region`/`notes`
/// attached (absent when the NOC code has no lookup entry). Nothing is
/// deduplicated here: a relay team still contributes one row per athlete.
///
/// If either input is empty the canonical table is empty; this is not an error.
pub fn preprocess(events: &[AthleteEvent], regions: &[NocRegion]) -> Result<Database> {
    let db = Database::new()?;
    if events.is_empty() || regions.is_empty() {
        log::warn!(
            "[Olympics] preprocess: {} events, {} regions; canonical table left empty",
            events.len(),
            regions.len()
        );
        return Ok(db);
    }
    db.load_events(events)?;
    db.load_regions(regions)?;
    db.build_canonical_table()?;
    Ok(db)
}

/// [`preprocess`] from raw CSV text. Missing required columns fail with
/// [`olympics_core::OlympicsError::Schema`].
pub fn preprocess_csv(events_csv: &str, regions_csv: &str) -> Result<Database> {
    let events = AthleteEvent::parse_csv(events_csv)?;
    let regions = NocRegion::parse_csv(regions_csv)?;
    preprocess(&events, &regions)
}

impl Database {
    fn build_canonical_table(&self) -> Result<usize> {
        let inserted = self.conn.execute(
            "INSERT INTO athletes
             (row_id, id, name, sex, age, height, weight, team, noc, games, year, season,
              city, sport, event, medal, region, notes, gold, silver, bronze)
             SELECT e.row_id, e.id, e.name, e.sex, e.age, e.height, e.weight, e.team, e.noc,
                    e.games, e.year, e.season, e.city, e.sport, e.event, e.medal,
                    r.region, r.notes,
                    IFNULL(e.medal = 'Gold', 0),
                    IFNULL(e.medal = 'Silver', 0),
                    IFNULL(e.medal = 'Bronze', 0)
             FROM athlete_events e
             LEFT JOIN noc_regions r ON r.noc = e.noc
             WHERE e.season = ?1
             ORDER BY e.row_id",
            [SUMMER],
        )?;
        let unmatched: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM athletes WHERE region IS NULL",
            [],
            |row| row.get(0),
        )?;
        log::info!(
            "[Olympics] preprocess: canonical table has {} rows, {} without a region",
            inserted,
            unmatched
        );
        Ok(inserted)
    }

    /// Number of rows in the canonical table.
    pub fn canonical_len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM athletes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// The whole canonical table in source order.
    pub fn canonical_table(&self) -> Result<Vec<CanonicalRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, sex, age, height, weight, team, noc, games, year, season,
                    city, sport, event, medal, region, notes
             FROM athletes
             ORDER BY row_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let sex: Option<String> = row.get(2)?;
                let medal: Option<String> = row.get(14)?;
                Ok(CanonicalRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    sex: sex.and_then(|s| s.parse().ok()),
                    age: row.get(3)?,
                    height: row.get(4)?,
                    weight: row.get(5)?,
                    team: row.get(6)?,
                    noc: row.get(7)?,
                    games: row.get(8)?,
                    year: row.get(9)?,
                    season: row.get(10)?,
                    city: row.get(11)?,
                    sport: row.get(12)?,
                    event: row.get(13)?,
                    medal: medal.and_then(|m| m.parse().ok()),
                    region: row.get(15)?,
                    notes: row.get(16)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "[Olympics] query: canonical_table returned {} records",
            rows.len()
        );
        Ok(rows)
    }
}
