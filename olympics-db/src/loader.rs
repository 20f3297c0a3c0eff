//! Loading functions for populating the raw tables.
//!
//! Records arrive already parsed and schema-checked by `olympics-core`.
//! Both loaders insert inside a single transaction.

use crate::{Database, Result};
use olympics_core::{AthleteEvent, NocRegion};
use rusqlite::params;

impl Database {
    /// Insert raw event records in the given order.
    ///
    /// `row_id` is assigned sequentially so later "first row" lookups follow
    /// source order.
    pub(crate) fn load_events(&self, events: &[AthleteEvent]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO athlete_events
                 (id, name, sex, age, height, weight, team, noc, games, year, season, city, sport, event, medal)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            )?;
            for e in events {
                stmt.execute(params![
                    e.id,
                    e.name,
                    e.sex.map(|s| s.as_str()),
                    e.age,
                    e.height,
                    e.weight,
                    e.team,
                    e.noc,
                    e.games,
                    e.year,
                    e.season,
                    e.city,
                    e.sport,
                    e.event,
                    e.medal.map(|m| m.as_str()),
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[Olympics] loader: Loaded {} athlete events", events.len());
        Ok(events.len())
    }

    /// Insert region lookup entries. A repeated NOC code replaces the earlier
    /// entry so each code maps to at most one region.
    pub(crate) fn load_regions(&self, regions: &[NocRegion]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let mut replaced = 0u32;
        {
            let mut exists = tx.prepare("SELECT 1 FROM noc_regions WHERE noc = ?1")?;
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO noc_regions (noc, region, notes) VALUES (?1, ?2, ?3)",
            )?;
            for r in regions {
                if exists.exists(params![r.noc])? {
                    log::warn!("[Olympics] loader: duplicate NOC code {}, last entry wins", r.noc);
                    replaced += 1;
                }
                stmt.execute(params![r.noc, r.region, r.notes])?;
            }
        }
        tx.commit()?;
        log::info!(
            "[Olympics] loader: Loaded {} NOC regions, {} replaced duplicates",
            regions.len(),
            replaced
        );
        Ok(regions.len() - replaced as usize)
    }
}
