use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    station::{PerStation, Station},
    timeline::Timeline,
};

/// Passengers showing up on a platform. `minute` is counted from the reference start.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArrivalSample {
    pub station: Station,
    pub minute: i32,
    pub count: u32,
}

impl ArrivalSample {
    pub const fn new(station: Station, minute: i32, count: u32) -> Self {
        ArrivalSample {
            station,
            minute,
            count,
        }
    }
}

/// Read-only arrival timelines of the three boarding stations.
#[derive(Debug, Clone, Default)]
pub struct ArrivalModel {
    samples: Vec<ArrivalSample>,
    timelines: PerStation<Timeline>,
    total_passengers: u64,
}

impl ArrivalModel {
    pub fn new(samples: Vec<ArrivalSample>) -> Self {
        let mut timelines = PerStation::from_fn(|_| Timeline::with_capacity(samples.len()));
        let mut total_passengers = 0;

        for sample in &samples {
            if sample.station.is_terminus() {
                warn!(
                    "Ignoring {} arrivals at the terminus, nobody boards at {}",
                    sample.count, sample.station
                );
                continue;
            }

            if sample.count == 0 {
                continue;
            }

            timelines[sample.station].push(sample.minute, i64::from(sample.count));
            total_passengers += u64::from(sample.count);
        }

        ArrivalModel {
            samples,
            timelines,
            total_passengers,
        }
    }

    pub fn samples(&self) -> &[ArrivalSample] {
        &self.samples
    }

    pub fn timeline(&self, station: Station) -> &Timeline {
        &self.timelines[station]
    }

    /// Passengers arrived at `station` at or before `minute`.
    pub fn arrived_until(&self, station: Station, minute: i32) -> i64 {
        self.timelines[station].total_until(minute)
    }

    pub fn total_passengers(&self) -> u64 {
        self.total_passengers
    }

    pub fn is_empty(&self) -> bool {
        self.total_passengers == 0
    }
}
