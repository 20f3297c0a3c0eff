//! In-memory SQLite preprocessing and aggregation layer for Olympic events.
//!
//! The two source tables are loaded into an in-memory SQLite database, joined
//! once into the canonical `athletes` table, and from then on only read.
//! Every view of the dashboard is a typed query method on [`Database`]
//! returning serializable structs from [`models`].
//!
//! # Usage
//!
//! ```rust
//! use olympics_db::preprocess_csv;
//!
//! let events = "\
//! ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal
//! 1,A Dijiang,M,24,180,80,China,CHN,1992 Summer,1992,Summer,Barcelona,Basketball,Basketball Men's Basketball,NA
//! ";
//! let regions = "NOC,region,notes\nCHN,China,\n";
//!
//! let db = preprocess_csv(events, regions).unwrap();
//! let options = db.country_year_list().unwrap();
//! assert_eq!(options.countries.len(), 2); // "Overall" + "China"
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `athlete_events` - raw participations in load order
//! - `noc_regions` - NOC code to region lookup
//! - `athletes` - the canonical table: Summer rows left-joined with their region
//!
//! Filter parameters are plain `Option`s; the `"Overall"` sentinel is
//! translated by callers through [`olympics_core::Selection`].

mod athlete_queries;
mod loader;
pub mod models;
mod preprocess;
mod queries;
pub mod schema;

#[cfg(test)]
mod test_support;

pub use athlete_queries::{FAMOUS_SPORTS, TOP_ATHLETES, TOP_ATHLETES_PER_COUNTRY};
pub use preprocess::{preprocess, preprocess_csv, SUMMER};

use olympics_core::OlympicsError;
use rusqlite::Connection;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by the database layer.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Data(#[from] OlympicsError),
}

pub type Result<T> = std::result::Result<T, DbError>;

/// Handle to the canonical Olympic events table.
///
/// Only [`preprocess`] produces a populated handle; the public API is
/// read-only afterwards, so every query is a pure function of the loaded
/// data. Cloning is cheap and shares the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<Connection>,
}

impl Database {
    /// Create an empty in-memory database with the full schema applied.
    pub(crate) fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(conn),
        })
    }
}
