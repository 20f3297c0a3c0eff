//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `athlete_events` - one row per raw participation; `row_id` records load order
/// - `noc_regions` - region lookup keyed by NOC code (at most one region per code)
/// - `athletes` - canonical table filled by preprocessing: Summer participations
///   with `region`/`notes` from the lookup and 0/1 `gold`/`silver`/`bronze`
///   indicator columns derived from `medal`
///
/// `row_id` is carried into `athletes` unchanged. Queries that keep "the
/// first row" of a group use `MIN(row_id)`.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS athlete_events (
        row_id INTEGER PRIMARY KEY,
        id INTEGER NOT NULL,
        name TEXT NOT NULL,
        sex TEXT,
        age REAL,
        height REAL,
        weight REAL,
        team TEXT NOT NULL,
        noc TEXT NOT NULL,
        games TEXT NOT NULL,
        year INTEGER NOT NULL,
        season TEXT NOT NULL,
        city TEXT NOT NULL,
        sport TEXT NOT NULL,
        event TEXT NOT NULL,
        medal TEXT
    );

    CREATE TABLE IF NOT EXISTS noc_regions (
        noc TEXT PRIMARY KEY,
        region TEXT,
        notes TEXT
    );

    CREATE TABLE IF NOT EXISTS athletes (
        row_id INTEGER PRIMARY KEY,
        id INTEGER NOT NULL,
        name TEXT NOT NULL,
        sex TEXT,
        age REAL,
        height REAL,
        weight REAL,
        team TEXT NOT NULL,
        noc TEXT NOT NULL,
        games TEXT NOT NULL,
        year INTEGER NOT NULL,
        season TEXT NOT NULL,
        city TEXT NOT NULL,
        sport TEXT NOT NULL,
        event TEXT NOT NULL,
        medal TEXT,
        region TEXT,
        notes TEXT,
        gold INTEGER NOT NULL DEFAULT 0,
        silver INTEGER NOT NULL DEFAULT 0,
        bronze INTEGER NOT NULL DEFAULT 0
    );
    CREATE INDEX IF NOT EXISTS idx_athletes_year ON athletes(year);
    CREATE INDEX IF NOT EXISTS idx_athletes_region ON athletes(region);
    CREATE INDEX IF NOT EXISTS idx_athletes_name ON athletes(name);
    CREATE INDEX IF NOT EXISTS idx_athletes_sport ON athletes(sport);
    "#
}
