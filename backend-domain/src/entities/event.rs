// Event entity
// One logged disposal: a trash reading joined with the bin it went into

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashEvent {
    pub trash_id: i64,
    pub trash_name: String,
    pub bin_id: i64,
    pub bin_name: String,
    pub time_stamp: DateTime<Utc>,
    pub correct: bool,
}

/// A table row: the event plus its stable "oldest = 1" display number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedEvent {
    pub number: usize,
    pub event: TrashEvent,
}
