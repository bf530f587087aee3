use serde::Serialize;

use crate::problem::{
    station::{PerStation, Station},
    train_type::TrainType,
};

/// A train stopping at a boarding station.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationCall {
    pub arrival_time: i32,
    pub available_capacity: u32,
    pub boarding: u32,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TerminusCall {
    pub arrival_time: i32,
    pub residual_capacity: u32,
    pub offloading: u32,
}

/// The simulated run of one train along the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// 1-based position of the train in the timetable.
    pub train_number: usize,
    pub train_type: TrainType,
    pub calls: PerStation<StationCall>,
    pub terminus: TerminusCall,
}

impl ScheduleEntry {
    pub fn call(&self, station: Station) -> &StationCall {
        &self.calls[station]
    }

    pub fn total_boarding(&self) -> u32 {
        self.calls.iter().map(|(_, call)| call.boarding).sum()
    }

    pub fn arrival_time(&self, station: Station) -> i32 {
        if station.is_terminus() {
            self.terminus.arrival_time
        } else {
            self.calls[station].arrival_time
        }
    }
}

pub fn total_offloading(schedule: &[ScheduleEntry]) -> u64 {
    schedule
        .iter()
        .map(|entry| u64::from(entry.terminus.offloading))
        .sum()
}
