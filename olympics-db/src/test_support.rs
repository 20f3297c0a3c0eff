//! Shared fixtures for the query tests.
//!
//! Ten participations: a two-swimmer relay Gold (one medal), a Winter row
//! that preprocessing drops, a NOC without a lookup entry (ROT) and
//! athletes without medals or body measurements.

use crate::{preprocess_csv, Database};

pub const EVENTS_CSV: &str = "\
ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal
1,Alice Swim,F,22,170,60,United States,USA,2000 Summer,2000,Summer,Sydney,Swimming,Swimming Women's 4 x 100 metres Freestyle Relay,Gold
2,Beth Swim,F,24,172,62,United States,USA,2000 Summer,2000,Summer,Sydney,Swimming,Swimming Women's 4 x 100 metres Freestyle Relay,Gold
1,Alice Swim,F,22,170,60,United States,USA,2000 Summer,2000,Summer,Sydney,Swimming,Swimming Women's 100 metres Freestyle,Silver
3,Carl Run,M,25,180,75,United States,USA,1996 Summer,1996,Summer,Atlanta,Athletics,Athletics Men's 100 metres,Silver
4,Dmitri Row,M,28,190,90,Russia,RUS,2000 Summer,2000,Summer,Sydney,Rowing,Rowing Men's Single Sculls,Gold
5,Ivan Box,M,23,175,70,Russia,RUS,1996 Summer,1996,Summer,Atlanta,Boxing,Boxing Men's Middleweight,Bronze
6,Erik Ski,M,27,182,80,Norway,NOR,1994 Winter,1994,Winter,Lillehammer,Cross Country Skiing,Cross Country Skiing Men's 10 kilometres,Gold
7,Femi Jump,M,NA,NA,NA,Nigeria,NGR,1996 Summer,1996,Summer,Atlanta,Athletics,Athletics Men's Long Jump,NA
8,Gao Ref,F,21,160,50,Refugee Olympic Athletes,ROT,2016 Summer,2016,Summer,Rio de Janeiro,Judo,Judo Women's Lightweight,NA
9,Hana Run,F,26,165,55,Nigeria,NGR,2000 Summer,2000,Summer,Sydney,Athletics,Athletics Women's 100 metres,Bronze
";

pub const REGIONS_CSV: &str = "\
NOC,region,notes
USA,USA,
RUS,Russia,
NOR,Norway,
NGR,Nigeria,
";

pub const EVENTS_HEADER: &str =
    "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal";

pub fn sample_db() -> Database {
    preprocess_csv(EVENTS_CSV, REGIONS_CSV).unwrap()
}

/// Build a database from event rows (without header) and the sample regions.
pub fn db_with_rows(rows: &[String]) -> Database {
    let mut csv = String::from(EVENTS_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    preprocess_csv(&csv, REGIONS_CSV).unwrap()
}

/// A Summer event row for `name` in `noc`; `medal` is `"NA"` for none.
pub fn event_row(name: &str, sex: &str, noc: &str, year: i32, sport: &str, event: &str, medal: &str) -> String {
    format!(
        "0,{name},{sex},25,180,75,{noc} Team,{noc},{year} Summer,{year},Summer,City {year},{sport},{event},{medal}"
    )
}
