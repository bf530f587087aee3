use crate::problem::{
    arrival_model::ArrivalModel,
    departure::Departure,
    line::BOARDING_DELAY,
    station::{PerStation, Station},
    timeline::Timeline,
};

use super::schedule_entry::{ScheduleEntry, StationCall, TerminusCall};

/// Runs every departure down the line and records who boards where.
///
/// Departures are processed in the given order, which must be ascending by timestamp: a train
/// only sees the passengers left on the platform by the trains before it. At each boarding
/// station the train takes everybody waiting at `arrival + BOARDING_DELAY`, up to its remaining
/// capacity. Everyone on board gets off at the terminus.
pub fn simulate(arrivals: &ArrivalModel, departures: &[Departure]) -> Vec<ScheduleEntry> {
    let mut boarded = PerStation::from_fn(|_| Timeline::with_capacity(departures.len()));

    departures
        .iter()
        .enumerate()
        .map(|(index, departure)| {
            let mut arrival_time = departure.timestamp;
            let mut available_capacity = departure.train_type.capacity();
            let mut calls = PerStation::<StationCall>::default();

            for station in Station::BOARDING {
                let boarding_time = arrival_time + BOARDING_DELAY;
                let waiting = arrivals.arrived_until(station, boarding_time)
                    + boarded[station].total_until(boarding_time);
                let boarding = waiting.clamp(0, i64::from(available_capacity)) as u32;

                if boarding > 0 {
                    boarded[station].push(boarding_time, -i64::from(boarding));
                }

                calls[station] = StationCall {
                    arrival_time,
                    available_capacity,
                    boarding,
                };

                available_capacity -= boarding;
                arrival_time = boarding_time + station.transit_to_next();
            }

            let mut entry = ScheduleEntry {
                train_number: index + 1,
                train_type: departure.train_type,
                calls,
                terminus: TerminusCall {
                    arrival_time,
                    residual_capacity: available_capacity,
                    offloading: 0,
                },
            };
            entry.terminus.offloading = entry.total_boarding();

            entry
        })
        .collect()
}
