// Time zone of the wall-clock timestamps stored in the log table

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};
use thiserror::Error;

/// How a stored `DATETIME` is turned into an instant.
///
/// `Local` reads it as the server process's local time. `Fixed` pins an
/// offset such as `+07:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DbTimeZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DbTimeZone {
    pub fn to_utc(&self, stored: NaiveDateTime) -> DateTime<Utc> {
        match self {
            DbTimeZone::Local => resolve(&Local, stored),
            DbTimeZone::Fixed(offset) => resolve(offset, stored),
        }
    }

    /// Session `time_zone` to request from the server, if any. `Local`
    /// leaves the server default in place.
    pub fn session_offset(&self) -> Option<String> {
        match self {
            DbTimeZone::Local => None,
            DbTimeZone::Fixed(offset) => Some(offset.to_string()),
        }
    }
}

// Ambiguous wall-clock times (DST fall-back) take the earlier instant;
// skipped ones (DST gap) are read as UTC.
fn resolve<Tz: TimeZone>(zone: &Tz, stored: NaiveDateTime) -> DateTime<Utc> {
    zone.from_local_datetime(&stored)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| stored.and_utc())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid db_timezone {0:?}: expected \"local\", \"UTC\" or an offset like \"+07:00\"")]
pub struct ParseDbTimeZoneError(String);

impl FromStr for DbTimeZone {
    type Err = ParseDbTimeZoneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "local" => return Ok(DbTimeZone::Local),
            "utc" | "z" => return Ok(DbTimeZone::Fixed(Utc.fix())),
            _ => {}
        }
        trimmed
            .parse::<FixedOffset>()
            .map(DbTimeZone::Fixed)
            .map_err(|_| ParseDbTimeZoneError(value.to_string()))
    }
}
