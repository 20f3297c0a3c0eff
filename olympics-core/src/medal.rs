//! Categorical columns of the event table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used wherever a missing medal must be rendered as its own category.
pub const NO_MEDAL: &str = "No Medal";

/// Medal outcome of a single participation. A participation without a medal
/// is represented as `Option::<Medal>::None`, never as a variant.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// Parse the raw `Medal` field. `NA` and empty mean no medal.
    pub fn parse_field(value: &str) -> Option<Medal> {
        value.trim().parse().ok()
    }
}

impl FromStr for Medal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Medal::Gold),
            "Silver" => Ok(Medal::Silver),
            "Bronze" => Ok(Medal::Bronze),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Athlete sex as recorded in the source (`M` / `F`).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
