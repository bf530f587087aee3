use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{clock::format_clock, station::Station, train_type::TrainType},
    solver::optimized_timetable::OptimizedTimetable,
    timetable::schedule_entry::ScheduleEntry,
};

/// One row of the published timetable, times formatted as `H:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "ScheduleEntry")]
pub struct JsonScheduleEntry {
    #[serde(rename = "TrainNum")]
    pub train_number: usize,
    #[serde(rename = "TrainType")]
    pub train_type: TrainType,

    #[serde(rename = "A_ArrivalTime")]
    pub a_arrival_time: String,
    #[serde(rename = "A_AvailCap")]
    pub a_available_capacity: u32,
    #[serde(rename = "A_Boarding")]
    pub a_boarding: u32,

    #[serde(rename = "B_ArrivalTime")]
    pub b_arrival_time: String,
    #[serde(rename = "B_AvailCap")]
    pub b_available_capacity: u32,
    #[serde(rename = "B_Boarding")]
    pub b_boarding: u32,

    #[serde(rename = "C_ArrivalTime")]
    pub c_arrival_time: String,
    #[serde(rename = "C_AvailCap")]
    pub c_available_capacity: u32,
    #[serde(rename = "C_Boarding")]
    pub c_boarding: u32,

    #[serde(rename = "U_ArrivalTime")]
    pub u_arrival_time: String,
    #[serde(rename = "U_AvailCap")]
    pub u_available_capacity: u32,
    #[serde(rename = "U_Offloading")]
    pub u_offloading: u32,
}

impl From<&ScheduleEntry> for JsonScheduleEntry {
    fn from(entry: &ScheduleEntry) -> Self {
        let a = entry.call(Station::A);
        let b = entry.call(Station::B);
        let c = entry.call(Station::C);

        JsonScheduleEntry {
            train_number: entry.train_number,
            train_type: entry.train_type,
            a_arrival_time: format_clock(a.arrival_time),
            a_available_capacity: a.available_capacity,
            a_boarding: a.boarding,
            b_arrival_time: format_clock(b.arrival_time),
            b_available_capacity: b.available_capacity,
            b_boarding: b.boarding,
            c_arrival_time: format_clock(c.arrival_time),
            c_available_capacity: c.available_capacity,
            c_boarding: c.boarding,
            u_arrival_time: format_clock(entry.terminus.arrival_time),
            u_available_capacity: entry.terminus.residual_capacity,
            u_offloading: entry.terminus.offloading,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizedSchedule")]
pub struct JsonOptimizedSchedule {
    /// Average passenger wait in minutes, absent when every candidate timetable was infeasible.
    pub average_wait: Option<f64>,
    pub feasible: bool,
    pub generations: usize,
    pub schedule: Vec<JsonScheduleEntry>,
}

impl From<&OptimizedTimetable> for JsonOptimizedSchedule {
    fn from(timetable: &OptimizedTimetable) -> Self {
        JsonOptimizedSchedule {
            average_wait: timetable.average_wait(),
            feasible: timetable.is_feasible(),
            generations: timetable.statistics.generations().len(),
            schedule: timetable
                .schedule
                .iter()
                .map(JsonScheduleEntry::from)
                .collect(),
        }
    }
}
