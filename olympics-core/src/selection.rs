//! The "Overall" filter sentinel.
//!
//! Year, country and sport selectors accept the literal string `"Overall"`
//! to mean "do not filter on this dimension". The sentinel only exists at the
//! API boundary: [`Selection::into_option`] turns it into a plain `Option`
//! before it reaches a query.

use crate::error::OlympicsError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The sentinel value meaning "include all".
pub const OVERALL: &str = "Overall";

/// A filter choice: either every value, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection<T> {
    #[default]
    Overall,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::Overall => None,
            Selection::Only(v) => Some(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Selection::Overall => None,
            Selection::Only(v) => Some(v),
        }
    }
}

impl Selection<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.as_option().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::Overall,
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = OlympicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == OVERALL {
            return Ok(Selection::Overall);
        }
        s.parse()
            .map(Selection::Only)
            .map_err(|_| OlympicsError::InvalidSelection {
                value: s.to_string(),
            })
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => f.write_str(OVERALL),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

/// Serialized as the bare option label, e.g. `"Overall"` or `1996`-as-string.
impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
