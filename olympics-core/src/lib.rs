//! Core record types for the Olympic athlete events dataset.
//!
//! The dataset ships as two tables: one row per athlete-event participation
//! (`athlete_events.csv`) and a National Olympic Committee lookup
//! (`noc_regions.csv`). This crate parses both into typed records and
//! validates their headers; the aggregation layer lives in `olympics-db`.

pub mod athlete_event;
pub mod error;
pub mod medal;
pub mod noc_region;
pub mod selection;
pub mod table;

pub use athlete_event::AthleteEvent;
pub use error::OlympicsError;
pub use medal::{Medal, Sex};
pub use noc_region::NocRegion;
pub use selection::{Selection, OVERALL};
