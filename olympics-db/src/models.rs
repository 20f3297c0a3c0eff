//! Query result model structs.
//!
//! All structs derive `Serialize` so the presentation layer can render them
//! as CSV or JSON without knowing the query that produced them.

use olympics_core::{Medal, OlympicsError, Selection, Sex};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One row of the canonical table: every event field plus the joined region.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CanonicalRecord {
    pub id: i32,
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: i32,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    /// Region name from the NOC lookup; `None` when the code has no entry.
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// Medal counts for one region.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionTally {
    pub region: String,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
}

/// Medal counts for one Games year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearTally {
    pub year: i32,
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
    pub total: i64,
}

/// Result of the medal tally view.
///
/// A leaderboard by region, ordered by gold count descending (ties by
/// region name), or, when only a country is pinned, that country's
/// tally per year in ascending order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "group_by", content = "rows", rename_all = "snake_case")]
pub enum MedalTally {
    Region(Vec<RegionTally>),
    Year(Vec<YearTally>),
}

impl MedalTally {
    pub fn len(&self) -> usize {
        match self {
            MedalTally::Region(rows) => rows.len(),
            MedalTally::Year(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of `total` over all rows.
    pub fn medal_total(&self) -> i64 {
        match self {
            MedalTally::Region(rows) => rows.iter().map(|r| r.total).sum(),
            MedalTally::Year(rows) => rows.iter().map(|r| r.total).sum(),
        }
    }
}

/// Choices for the year and country selectors, each led by "Overall".
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterOptions {
    pub years: Vec<Selection<i32>>,
    pub countries: Vec<Selection<String>>,
}

/// Column whose distinct values are counted per edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendColumn {
    /// Participating nations
    Region,
    Event,
    /// Athletes, by name
    Name,
    Sport,
}

impl TrendColumn {
    /// Column name in the `athletes` table.
    pub fn column(&self) -> &'static str {
        match self {
            TrendColumn::Region => "region",
            TrendColumn::Event => "event",
            TrendColumn::Name => "name",
            TrendColumn::Sport => "sport",
        }
    }
}

impl FromStr for TrendColumn {
    type Err = OlympicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" | "nations" => Ok(TrendColumn::Region),
            "event" | "events" => Ok(TrendColumn::Event),
            "name" | "athletes" => Ok(TrendColumn::Name),
            "sport" | "sports" => Ok(TrendColumn::Sport),
            _ => Err(OlympicsError::InvalidSelection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TrendColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Number of distinct values of a column seen in one edition.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EditionCount {
    pub edition: i32,
    pub count: i64,
}

/// An athlete ranked by medals won.
///
/// `sport` and `region` come from the athlete's first row in the canonical
/// table, which may differ from the sport filter used for ranking.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AthleteMedals {
    pub name: String,
    pub medals: i64,
    pub sport: String,
    pub region: Option<String>,
}

/// Medals won by one country in one year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearMedalCount {
    pub year: i32,
    pub medals: i64,
}

/// A sport × year count matrix. Missing combinations are zero.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Heatmap {
    /// Row labels, ascending
    pub sports: Vec<String>,
    /// Column labels, ascending
    pub years: Vec<i32>,
    /// `counts[i][j]` is the value for `sports[i]` in `years[j]`
    pub counts: Vec<Vec<i64>>,
}

impl Heatmap {
    /// Pivot `(sport, year, count)` triples into a dense matrix.
    pub fn from_cells(cells: impl IntoIterator<Item = (String, i32, i64)>) -> Self {
        let mut values: BTreeMap<(String, i32), i64> = BTreeMap::new();
        let mut sports = BTreeSet::new();
        let mut years = BTreeSet::new();
        for (sport, year, count) in cells {
            sports.insert(sport.clone());
            years.insert(year);
            *values.entry((sport, year)).or_insert(0) += count;
        }

        let sports: Vec<String> = sports.into_iter().collect();
        let years: Vec<i32> = years.into_iter().collect();
        let counts = sports
            .iter()
            .map(|sport| {
                years
                    .iter()
                    .map(|year| {
                        values
                            .get(&(sport.clone(), *year))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            sports,
            years,
            counts,
        }
    }

    pub fn get(&self, sport: &str, year: i32) -> Option<i64> {
        let i = self.sports.iter().position(|s| s == sport)?;
        let j = self.years.iter().position(|y| *y == year)?;
        Some(self.counts[i][j])
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }

    /// Sum of every cell.
    pub fn total(&self) -> i64 {
        self.counts.iter().flatten().sum()
    }
}

/// One distinct athlete with body measurements for the height/weight view.
///
/// `medal` is never empty: athletes without a medal carry `"No Medal"`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AthleteProfile {
    pub name: String,
    pub sex: Option<String>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    pub year: i32,
    pub sport: String,
    pub event: String,
    pub region: Option<String>,
    pub medal: String,
}

/// Distinct male and female athletes first seen in one year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenderParticipation {
    pub year: i32,
    pub male: i64,
    pub female: i64,
}

/// Headline counts for the overall analysis view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverallStats {
    pub editions: i64,
    pub host_cities: i64,
    pub sports: i64,
    pub events: i64,
    pub athletes: i64,
    pub nations: i64,
}

/// Age samples of distinct athletes, overall and per medal.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct AgeDistribution {
    pub overall: Vec<f64>,
    pub gold: Vec<f64>,
    pub silver: Vec<f64>,
    pub bronze: Vec<f64>,
}

/// Ages of Gold medallists in one sport.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SportAges {
    pub sport: String,
    pub ages: Vec<f64>,
}
