use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::train_type::TrainType;

/// A train leaving station A. `timestamp` is in minutes from the reference start.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Departure {
    pub train_type: TrainType,
    pub timestamp: i32,
}

impl Departure {
    pub const fn new(train_type: TrainType, timestamp: i32) -> Self {
        Departure {
            train_type,
            timestamp,
        }
    }
}

pub fn sort_departures(departures: &mut [Departure]) {
    departures.sort_by_key(|departure| departure.timestamp);
}

pub fn is_sorted(departures: &[Departure]) -> bool {
    departures.is_sorted_by_key(|departure| departure.timestamp)
}
