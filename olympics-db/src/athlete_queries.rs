//! Athlete-centric queries: rankings, body measurements, participation by
//! sex and age distributions.
//!
//! Several views count each athlete once. An athlete is identified by
//! `(name, region)` across the whole table, and the row kept for them is
//! their first one in source order. Someone who competed at several Games
//! therefore appears once, under their first year.

use crate::models::{AgeDistribution, AthleteMedals, AthleteProfile, GenderParticipation, SportAges};
use crate::{Database, Result};
use olympics_core::medal::NO_MEDAL;
use olympics_core::Medal;
use rusqlite::params;

/// Ranking size of [`Database::most_successful`].
pub const TOP_ATHLETES: usize = 15;

/// Ranking size of [`Database::most_successful_countrywise`].
pub const TOP_ATHLETES_PER_COUNTRY: usize = 10;

/// Widely contested sports shown in the per-sport age comparison.
pub const FAMOUS_SPORTS: [&str; 21] = [
    "Basketball", "Judo", "Football", "Athletics", "Swimming", "Badminton", "Sailing",
    "Gymnastics", "Handball", "Wrestling", "Hockey", "Fencing", "Shooting", "Boxing",
    "Taekwondo", "Cycling", "Diving", "Canoeing", "Tennis", "Archery", "Volleyball",
];

/// First row per `(name, region)`.
const DISTINCT_ATHLETES: &str = "SELECT * FROM athletes
        WHERE row_id IN (SELECT MIN(row_id) FROM athletes GROUP BY name, region)";

impl Database {
    // ───────────────────── Rankings ─────────────────────

    /// Top 15 athletes by medal rows, optionally within one sport.
    ///
    /// Every medal an athlete personally won counts, team medals included.
    /// Equal counts are ordered by the athlete's first medal row.
    pub fn most_successful(&self, sport: Option<&str>) -> Result<Vec<AthleteMedals>> {
        let rows = self.top_athletes(sport, None, TOP_ATHLETES)?;
        log::info!(
            "[Olympics] query: most_successful returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Top 10 athletes of one region by medal rows, across all sports.
    pub fn most_successful_countrywise(&self, country: &str) -> Result<Vec<AthleteMedals>> {
        let rows = self.top_athletes(None, Some(country), TOP_ATHLETES_PER_COUNTRY)?;
        log::info!(
            "[Olympics] query: most_successful_countrywise returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// The attached sport and region come from the athlete's first row in the
    /// whole table, matched by name only. For multi-sport or dual-nationality
    /// athletes this may not be the sport or region that was ranked.
    fn top_athletes(
        &self,
        sport: Option<&str>,
        country: Option<&str>,
        limit: usize,
    ) -> Result<Vec<AthleteMedals>> {
        let mut stmt = self.conn.prepare(
            "WITH counts AS (
                 SELECT name, COUNT(*) AS medals, MIN(row_id) AS first_row
                 FROM athletes
                 WHERE medal IS NOT NULL
                   AND (?1 IS NULL OR sport = ?1)
                   AND (?2 IS NULL OR region = ?2)
                 GROUP BY name
                 ORDER BY medals DESC, first_row
                 LIMIT ?3
             )
             SELECT c.name, c.medals,
                    (SELECT a.sport FROM athletes a WHERE a.name = c.name ORDER BY a.row_id LIMIT 1),
                    (SELECT a.region FROM athletes a WHERE a.name = c.name ORDER BY a.row_id LIMIT 1)
             FROM counts c
             ORDER BY c.medals DESC, c.first_row",
        )?;
        let rows = stmt
            .query_map(params![sport, country, limit as i64], |row| {
                Ok(AthleteMedals {
                    name: row.get(0)?,
                    medals: row.get(1)?,
                    sport: row.get(2)?,
                    region: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Athlete Profiles ─────────────────────

    /// One row per distinct athlete with height, weight and medal category.
    ///
    /// The sport filter applies after deduplication, to the athlete's first
    /// row. A missing medal is reported as `"No Medal"`.
    pub fn weight_v_height(&self, sport: Option<&str>) -> Result<Vec<AthleteProfile>> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH distinct_athletes AS ({DISTINCT_ATHLETES})
             SELECT name, sex, age, height, weight, team, noc, year, sport, event, region,
                    COALESCE(medal, ?2)
             FROM distinct_athletes
             WHERE ?1 IS NULL OR sport = ?1
             ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map(params![sport, NO_MEDAL], |row| {
                Ok(AthleteProfile {
                    name: row.get(0)?,
                    sex: row.get(1)?,
                    age: row.get(2)?,
                    height: row.get(3)?,
                    weight: row.get(4)?,
                    team: row.get(5)?,
                    noc: row.get(6)?,
                    year: row.get(7)?,
                    sport: row.get(8)?,
                    event: row.get(9)?,
                    region: row.get(10)?,
                    medal: row.get(11)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "[Olympics] query: weight_v_height returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct male and female athletes per year, ascending.
    ///
    /// Years are those with at least one male athlete; female counts are
    /// joined onto them and default to zero.
    pub fn men_vs_women(&self) -> Result<Vec<GenderParticipation>> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH distinct_athletes AS ({DISTINCT_ATHLETES})
             SELECT year,
                    COUNT(CASE WHEN sex = 'M' THEN 1 END),
                    COUNT(CASE WHEN sex = 'F' THEN 1 END)
             FROM distinct_athletes
             GROUP BY year
             HAVING COUNT(CASE WHEN sex = 'M' THEN 1 END) > 0
             ORDER BY year"
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(GenderParticipation {
                    year: row.get(0)?,
                    male: row.get(1)?,
                    female: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "[Olympics] query: men_vs_women returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Age Distributions ─────────────────────

    /// Known ages of distinct athletes, overall and by medal of their first row.
    pub fn age_distribution(&self) -> Result<AgeDistribution> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH distinct_athletes AS ({DISTINCT_ATHLETES})
             SELECT age, medal FROM distinct_athletes
             WHERE age IS NOT NULL
             ORDER BY row_id"
        ))?;
        let mut dist = AgeDistribution::default();
        for row in stmt.query_map([], |row| {
            Ok((row.get::<_, f64>(0)?, row.get::<_, Option<String>>(1)?))
        })? {
            let (age, medal) = row?;
            dist.overall.push(age);
            match medal.and_then(|m| m.parse::<Medal>().ok()) {
                Some(Medal::Gold) => dist.gold.push(age),
                Some(Medal::Silver) => dist.silver.push(age),
                Some(Medal::Bronze) => dist.bronze.push(age),
                None => {}
            }
        }
        log::info!(
            "[Olympics] query: age_distribution returned {} ages",
            dist.overall.len()
        );
        Ok(dist)
    }

    /// Known ages of distinct Gold medallists for each listed sport, in list order.
    pub fn gold_medal_ages_by_sport(&self, sports: &[&str]) -> Result<Vec<SportAges>> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH distinct_athletes AS ({DISTINCT_ATHLETES})
             SELECT age FROM distinct_athletes
             WHERE sport = ?1 AND medal = ?2 AND age IS NOT NULL
             ORDER BY row_id"
        ))?;
        let mut result = Vec::with_capacity(sports.len());
        for sport in sports {
            let ages = stmt
                .query_map(params![sport, Medal::Gold.as_str()], |row| row.get(0))?
                .collect::<std::result::Result<Vec<f64>, _>>()?;
            result.push(SportAges {
                sport: sport.to_string(),
                ages,
            });
        }
        log::info!(
            "[Olympics] query: gold_medal_ages_by_sport returned {} sports",
            result.len()
        );
        Ok(result)
    }
}
