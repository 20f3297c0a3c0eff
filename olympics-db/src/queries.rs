//! Medal, filter and trend queries over the canonical `athletes` table.
//!
//! # Medal event identity
//!
//! A relay or team medal appears once per athlete in the canonical table.
//! Queries that count medals *won by a country* first reduce the table to
//! distinct `(team, noc, games, year, city, sport, event, medal)` tuples.
//! `region` and the indicator columns are functions of `noc` and `medal`, so
//! selecting them alongside the identity does not split any tuple.

use crate::models::{
    EditionCount, FilterOptions, Heatmap, MedalTally, OverallStats, RegionTally, TrendColumn,
    YearMedalCount, YearTally,
};
use crate::{Database, Result};
use olympics_core::Selection;
use rusqlite::params;

/// Distinct medal-awarding outcomes, including rows without a medal.
pub(crate) const MEDAL_EVENTS: &str = "SELECT DISTINCT team, noc, games, year, city, sport, event, medal,
                        region, gold, silver, bronze
        FROM athletes";

impl Database {
    // ───────────────────── Medal Tally ─────────────────────

    /// Medal tally filtered by year and/or country (`None` = all).
    ///
    /// With only a country pinned the result is that country's tally per
    /// year, ascending. Otherwise it is a per-region leaderboard ordered by
    /// gold count descending, ties by region name. Rows without a region are
    /// left out of the leaderboard; rows without a medal count nowhere.
    pub fn fetch_medal_tally(
        &self,
        year: Option<i32>,
        country: Option<&str>,
    ) -> Result<MedalTally> {
        let tally = match (year, country) {
            (None, Some(country)) => MedalTally::Year(self.tally_by_year(country)?),
            _ => MedalTally::Region(self.tally_by_region(year, country)?),
        };
        log::info!(
            "[Olympics] query: fetch_medal_tally returned {} rows",
            tally.len()
        );
        Ok(tally)
    }

    fn tally_by_region(&self, year: Option<i32>, country: Option<&str>) -> Result<Vec<RegionTally>> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH medal_events AS ({MEDAL_EVENTS})
             SELECT region, SUM(gold) AS g, SUM(silver), SUM(bronze)
             FROM medal_events
             WHERE region IS NOT NULL
               AND (?1 IS NULL OR year = ?1)
               AND (?2 IS NULL OR region = ?2)
             GROUP BY region
             ORDER BY g DESC, region"
        ))?;
        let rows = stmt
            .query_map(params![year, country], |row| {
                let (gold, silver, bronze): (i64, i64, i64) =
                    (row.get(1)?, row.get(2)?, row.get(3)?);
                Ok(RegionTally {
                    region: row.get(0)?,
                    gold,
                    silver,
                    bronze,
                    total: gold + silver + bronze,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn tally_by_year(&self, country: &str) -> Result<Vec<YearTally>> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH medal_events AS ({MEDAL_EVENTS})
             SELECT year, SUM(gold), SUM(silver), SUM(bronze)
             FROM medal_events
             WHERE region = ?1
             GROUP BY year
             ORDER BY year"
        ))?;
        let rows = stmt
            .query_map(params![country], |row| {
                let (gold, silver, bronze): (i64, i64, i64) =
                    (row.get(1)?, row.get(2)?, row.get(3)?);
                Ok(YearTally {
                    year: row.get(0)?,
                    gold,
                    silver,
                    bronze,
                    total: gold + silver + bronze,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Medals won by `country` per year, ascending. Team medals count once.
    pub fn yearwise_medal_tally(&self, country: &str) -> Result<Vec<YearMedalCount>> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH medal_events AS ({MEDAL_EVENTS})
             SELECT year, COUNT(*)
             FROM medal_events
             WHERE medal IS NOT NULL AND region = ?1
             GROUP BY year
             ORDER BY year"
        ))?;
        let rows = stmt
            .query_map(params![country], |row| {
                Ok(YearMedalCount {
                    year: row.get(0)?,
                    medals: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "[Olympics] query: yearwise_medal_tally returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Medals won by `country` per sport and year. Team medals count once.
    pub fn country_event_heatmap(&self, country: &str) -> Result<Heatmap> {
        let mut stmt = self.conn.prepare(&format!(
            "WITH medal_events AS ({MEDAL_EVENTS})
             SELECT sport, year, COUNT(*)
             FROM medal_events
             WHERE medal IS NOT NULL AND region = ?1
             GROUP BY sport, year"
        ))?;
        let cells = stmt
            .query_map(params![country], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<std::result::Result<Vec<(String, i32, i64)>, _>>()?;
        let map = Heatmap::from_cells(cells);
        log::info!(
            "[Olympics] query: country_event_heatmap returned {}x{} cells",
            map.sports.len(),
            map.years.len()
        );
        Ok(map)
    }

    // ───────────────────── Overall Analysis ─────────────────────

    /// Number of distinct `column` values per edition, ascending by year.
    ///
    /// Counts distinct `(year, column)` pairs, so a missing value (e.g. a
    /// NOC without a region) counts as one value of its own.
    pub fn data_over_time(&self, column: TrendColumn) -> Result<Vec<EditionCount>> {
        let col = column.column();
        let mut stmt = self.conn.prepare(&format!(
            "SELECT year, COUNT(*)
             FROM (SELECT DISTINCT year, {col} FROM athletes)
             GROUP BY year
             ORDER BY year"
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EditionCount {
                    edition: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::info!(
            "[Olympics] query: data_over_time({}) returned {} records",
            column,
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct events held per sport and year.
    pub fn events_heatmap(&self) -> Result<Heatmap> {
        let mut stmt = self.conn.prepare(
            "SELECT sport, year, COUNT(*)
             FROM (SELECT DISTINCT year, sport, event FROM athletes)
             GROUP BY sport, year",
        )?;
        let cells = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<std::result::Result<Vec<(String, i32, i64)>, _>>()?;
        let map = Heatmap::from_cells(cells);
        log::info!(
            "[Olympics] query: events_heatmap returned {}x{} cells",
            map.sports.len(),
            map.years.len()
        );
        Ok(map)
    }

    /// Headline distinct counts. The 1906 Intercalated Games are not an
    /// official edition, hence one fewer edition than distinct years.
    pub fn overall_stats(&self) -> Result<OverallStats> {
        let stats = self.conn.query_row(
            "SELECT COUNT(DISTINCT year), COUNT(DISTINCT city), COUNT(DISTINCT sport),
                    COUNT(DISTINCT event), COUNT(DISTINCT name), COUNT(DISTINCT region)
             FROM athletes",
            [],
            |row| {
                let years: i64 = row.get(0)?;
                Ok(OverallStats {
                    editions: (years - 1).max(0),
                    host_cities: row.get(1)?,
                    sports: row.get(2)?,
                    events: row.get(3)?,
                    athletes: row.get(4)?,
                    nations: row.get(5)?,
                })
            },
        )?;
        log::info!("[Olympics] query: overall_stats returned {:?}", stats);
        Ok(stats)
    }

    // ───────────────────── Filter Options ─────────────────────

    /// Year and country choices, ascending, each led by "Overall".
    pub fn country_year_list(&self) -> Result<FilterOptions> {
        let mut years = vec![Selection::Overall];
        years.extend(
            self.distinct_years()?
                .into_iter()
                .map(Selection::Only),
        );

        let mut countries = vec![Selection::Overall];
        countries.extend(self.region_list()?.into_iter().map(Selection::Only));

        log::info!(
            "[Olympics] query: country_year_list returned {} years, {} countries",
            years.len() - 1,
            countries.len() - 1
        );
        Ok(FilterOptions { years, countries })
    }

    fn distinct_years(&self) -> Result<Vec<i32>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT year FROM athletes ORDER BY year")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// Distinct non-null regions, ascending.
    pub fn region_list(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT region FROM athletes WHERE region IS NOT NULL ORDER BY region",
        )?;
        let regions = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(regions)
    }

    /// Sport choices, ascending, led by "Overall".
    pub fn sport_list(&self) -> Result<Vec<Selection<String>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT sport FROM athletes ORDER BY sport")?;
        let mut sports = vec![Selection::Overall];
        for sport in stmt.query_map([], |row| row.get::<_, String>(0))? {
            sports.push(Selection::Only(sport?));
        }
        Ok(sports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_with_rows, event_row, sample_db};

    fn region_rows(tally: MedalTally) -> Vec<RegionTally> {
        match tally {
            MedalTally::Region(rows) => rows,
            other => panic!("expected a region leaderboard, got {other:?}"),
        }
    }

    fn year_rows(tally: MedalTally) -> Vec<YearTally> {
        match tally {
            MedalTally::Year(rows) => rows,
            other => panic!("expected a yearly tally, got {other:?}"),
        }
    }

    // ───────────────────── fetch_medal_tally ─────────────────────

    #[test]
    fn overall_tally_deduplicates_team_medals() {
        let db = sample_db();
        let rows = region_rows(db.fetch_medal_tally(None, None).unwrap());

        let regions: Vec<&str> = rows.iter().map(|r| r.region.as_str()).collect();
        // Russia and USA tie on one gold; name order breaks the tie.
        assert_eq!(regions, vec!["Russia", "USA", "Nigeria"]);

        let usa = &rows[1];
        assert_eq!((usa.gold, usa.silver, usa.bronze, usa.total), (1, 2, 0, 3));
        let russia = &rows[0];
        assert_eq!((russia.gold, russia.silver, russia.bronze), (1, 0, 1));
    }

    #[test]
    fn overall_total_equals_distinct_medal_events() {
        let db = sample_db();
        let tally = db.fetch_medal_tally(None, None).unwrap();
        // Relay gold, 100m free silver, 100m silver, sculls gold, boxing bronze,
        // women's 100m bronze. The refugee judoka has no region and no medal.
        assert_eq!(tally.medal_total(), 6);
    }

    #[test]
    fn relay_gold_counts_once_for_pinned_country() {
        let db = db_with_rows(&[
            event_row("Ann", "F", "USA", 2000, "Swimming", "Relay", "Gold"),
            event_row("Bea", "F", "USA", 2000, "Swimming", "Relay", "Gold"),
            event_row("Cat", "F", "USA", 1996, "Swimming", "200m", "Silver"),
        ]);
        let rows = year_rows(db.fetch_medal_tally(None, Some("USA")).unwrap());
        let gold: i64 = rows.iter().map(|r| r.gold).sum();
        let silver: i64 = rows.iter().map(|r| r.silver).sum();
        let total: i64 = rows.iter().map(|r| r.total).sum();
        assert_eq!((gold, silver, total), (1, 1, 2));
    }

    #[test]
    fn pinned_country_groups_by_year_ascending() {
        let db = sample_db();
        let rows = year_rows(db.fetch_medal_tally(None, Some("USA")).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 1996);
        assert_eq!((rows[0].gold, rows[0].silver, rows[0].total), (0, 1, 1));
        assert_eq!(rows[1].year, 2000);
        assert_eq!((rows[1].gold, rows[1].silver, rows[1].total), (1, 1, 2));
    }

    #[test]
    fn pinned_year_groups_by_region() {
        let db = sample_db();
        let rows = region_rows(db.fetch_medal_tally(Some(1996), None).unwrap());
        let regions: Vec<&str> = rows.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions.len(), 3);
        assert!(rows.iter().all(|r| r.gold == 0));
        // All tied on zero gold, so alphabetical.
        assert_eq!(regions, vec!["Nigeria", "Russia", "USA"]);
    }

    #[test]
    fn pinned_year_and_country_is_single_region_row() {
        let db = sample_db();
        let rows = region_rows(db.fetch_medal_tally(Some(2000), Some("USA")).unwrap());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region, "USA");
        assert_eq!((rows[0].gold, rows[0].silver, rows[0].total), (1, 1, 2));
    }

    #[test]
    fn regions_without_medals_still_listed_with_zero() {
        let db = sample_db();
        let rows = region_rows(db.fetch_medal_tally(Some(1996), Some("Nigeria")).unwrap());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, 0);
    }

    #[test]
    fn unknown_filters_give_empty_tally() {
        let db = sample_db();
        assert!(db.fetch_medal_tally(Some(1900), None).unwrap().is_empty());
        assert!(db.fetch_medal_tally(None, Some("Atlantis")).unwrap().is_empty());
    }

    #[test]
    fn yearwise_sums_match_country_tally() {
        let db = sample_db();
        for country in ["USA", "Russia", "Nigeria"] {
            let yearly: i64 = db
                .yearwise_medal_tally(country)
                .unwrap()
                .iter()
                .map(|r| r.medals)
                .sum();
            let tally = db.fetch_medal_tally(None, Some(country)).unwrap();
            assert_eq!(yearly, tally.medal_total(), "mismatch for {country}");
        }
    }

    // ───────────────────── yearwise_medal_tally ─────────────────────

    #[test]
    fn yearwise_tally_counts_team_medals_once() {
        let db = sample_db();
        let rows = db.yearwise_medal_tally("USA").unwrap();
        assert_eq!(
            rows,
            vec![
                YearMedalCount { year: 1996, medals: 1 },
                YearMedalCount { year: 2000, medals: 2 },
            ]
        );
    }

    #[test]
    fn yearwise_tally_skips_years_without_medals() {
        let db = db_with_rows(&[
            event_row("Ann", "F", "USA", 1996, "Judo", "Open", "NA"),
            event_row("Ann", "F", "USA", 2000, "Judo", "Open", "Bronze"),
        ]);
        let rows = db.yearwise_medal_tally("USA").unwrap();
        assert_eq!(rows, vec![YearMedalCount { year: 2000, medals: 1 }]);
    }

    #[test]
    fn yearwise_tally_unknown_country_is_empty() {
        let db = sample_db();
        assert!(db.yearwise_medal_tally("Atlantis").unwrap().is_empty());
    }

    // ───────────────────── country_event_heatmap ─────────────────────

    #[test]
    fn country_heatmap_pivots_sport_by_year() {
        let db = sample_db();
        let map = db.country_event_heatmap("USA").unwrap();
        assert_eq!(map.sports, vec!["Athletics", "Swimming"]);
        assert_eq!(map.years, vec![1996, 2000]);
        assert_eq!(map.counts, vec![vec![1, 0], vec![0, 2]]);
    }

    #[test]
    fn country_heatmap_total_matches_yearwise() {
        let db = sample_db();
        let map = db.country_event_heatmap("Russia").unwrap();
        let yearly: i64 = db
            .yearwise_medal_tally("Russia")
            .unwrap()
            .iter()
            .map(|r| r.medals)
            .sum();
        assert_eq!(map.total(), yearly);
    }

    #[test]
    fn country_heatmap_without_medals_is_empty() {
        let db = sample_db();
        assert!(db.country_event_heatmap("Norway").unwrap().is_empty());
    }

    // ───────────────────── data_over_time ─────────────────────

    #[test]
    fn nations_over_time_counts_distinct_regions() {
        let db = sample_db();
        let rows = db.data_over_time(TrendColumn::Region).unwrap();
        let years: Vec<i32> = rows.iter().map(|r| r.edition).collect();
        assert_eq!(years, vec![1996, 2000, 2016]);

        let in_1996 = rows.iter().find(|r| r.edition == 1996).unwrap();
        // USA, Russia and Nigeria competed in 1996.
        assert_eq!(in_1996.count, 3);
    }

    #[test]
    fn missing_region_counts_as_one_value() {
        let db = sample_db();
        let rows = db.data_over_time(TrendColumn::Region).unwrap();
        let in_2016 = rows.iter().find(|r| r.edition == 2016).unwrap();
        assert_eq!(in_2016.count, 1);
    }

    #[test]
    fn events_and_athletes_over_time() {
        let db = sample_db();
        let events: Vec<i64> = db
            .data_over_time(TrendColumn::Event)
            .unwrap()
            .iter()
            .map(|r| r.count)
            .collect();
        assert_eq!(events, vec![3, 4, 1]);

        let athletes: Vec<i64> = db
            .data_over_time(TrendColumn::Name)
            .unwrap()
            .iter()
            .map(|r| r.count)
            .collect();
        // Alice swam two events in 2000 but is one athlete.
        assert_eq!(athletes, vec![3, 4, 1]);
    }

    // ───────────────────── events_heatmap / overall_stats ─────────────────────

    #[test]
    fn events_heatmap_counts_distinct_events() {
        let db = sample_db();
        let map = db.events_heatmap().unwrap();
        assert_eq!(
            map.sports,
            vec!["Athletics", "Boxing", "Judo", "Rowing", "Swimming"]
        );
        assert_eq!(map.years, vec![1996, 2000, 2016]);
        assert_eq!(map.get("Athletics", 1996), Some(2));
        assert_eq!(map.get("Athletics", 2000), Some(1));
        // The relay appears on two rows but is one event.
        assert_eq!(map.get("Swimming", 2000), Some(2));
        assert_eq!(map.get("Judo", 1996), Some(0));
    }

    #[test]
    fn overall_stats_counts_distinct_values() {
        let db = sample_db();
        let stats = db.overall_stats().unwrap();
        assert_eq!(
            stats,
            OverallStats {
                editions: 2,
                host_cities: 3,
                sports: 5,
                events: 8,
                athletes: 8,
                nations: 3,
            }
        );
    }

    // ───────────────────── filter options ─────────────────────

    #[test]
    fn country_year_list_leads_with_overall() {
        let db = sample_db();
        let options = db.country_year_list().unwrap();
        assert_eq!(
            options.years,
            vec![
                Selection::Overall,
                Selection::Only(1996),
                Selection::Only(2000),
                Selection::Only(2016),
            ]
        );
        let countries: Vec<String> = options.countries.iter().map(|c| c.to_string()).collect();
        assert_eq!(countries, vec!["Overall", "Nigeria", "Russia", "USA"]);
    }

    #[test]
    fn country_year_list_years_strictly_ascending() {
        let db = sample_db();
        let options = db.country_year_list().unwrap();
        let years: Vec<i32> = options
            .years
            .iter()
            .skip(1)
            .filter_map(|y| y.as_option().copied())
            .collect();
        assert_eq!(years.len(), options.years.len() - 1);
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sport_list_is_sorted_with_sentinel() {
        let db = sample_db();
        let sports: Vec<String> = db
            .sport_list()
            .unwrap()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            sports,
            vec!["Overall", "Athletics", "Boxing", "Judo", "Rowing", "Swimming"]
        );
    }

    // ───────────────────── empty table ─────────────────────

    #[test]
    fn empty_table_gives_empty_results() {
        let db = db_with_rows(&[]);
        assert!(db.fetch_medal_tally(None, None).unwrap().is_empty());
        assert!(db.fetch_medal_tally(None, Some("USA")).unwrap().is_empty());
        assert!(db.data_over_time(TrendColumn::Region).unwrap().is_empty());
        assert!(db.events_heatmap().unwrap().is_empty());
        assert_eq!(db.overall_stats().unwrap().editions, 0);

        let options = db.country_year_list().unwrap();
        assert_eq!(options.years, vec![Selection::Overall]);
        assert_eq!(options.countries, vec![Selection::Overall]);
    }
}
