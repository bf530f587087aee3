use thiserror::Error;

use crate::problem::{
    arrival_model::ArrivalModel,
    departure::Departure,
    line::{MINIMUM_HEADWAY, PLANNING_HORIZON},
};

use super::schedule_entry::{ScheduleEntry, total_offloading};

/// Hard constraint a timetable breaks. Such a timetable is never scored.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Infeasibility {
    #[error("first train leaves at minute {0}, before the start of service")]
    StartsTooEarly(i32),

    #[error("last train leaves at minute {0}, after the end of the planning horizon")]
    EndsTooLate(i32),

    /// `train_number` is the 1-based position of the later of the two trains.
    #[error("train {train_number} leaves {gap} minutes after the previous one")]
    HeadwayTooShort { train_number: usize, gap: i32 },

    #[error("{offloaded} of {arrived} passengers reach the terminus")]
    UnservedPassengers { arrived: u64, offloaded: u64 },
}

/// Checks the departure times alone. `departures` must be sorted by timestamp.
pub fn check_departures(departures: &[Departure]) -> Result<(), Infeasibility> {
    let (Some(first), Some(last)) = (departures.first(), departures.last()) else {
        return Ok(());
    };

    if first.timestamp < 0 {
        return Err(Infeasibility::StartsTooEarly(first.timestamp));
    }

    if last.timestamp > PLANNING_HORIZON {
        return Err(Infeasibility::EndsTooLate(last.timestamp));
    }

    if let Some((index, gap)) = departures
        .windows(2)
        .map(|pair| pair[1].timestamp - pair[0].timestamp)
        .enumerate()
        .find(|(_, gap)| *gap < MINIMUM_HEADWAY)
    {
        return Err(Infeasibility::HeadwayTooShort {
            train_number: index + 2,
            gap,
        });
    }

    Ok(())
}

/// Every passenger who showed up must have been carried to the terminus.
pub fn check_service(
    arrivals: &ArrivalModel,
    schedule: &[ScheduleEntry],
) -> Result<(), Infeasibility> {
    let arrived = arrivals.total_passengers();
    let offloaded = total_offloading(schedule);

    if offloaded < arrived {
        return Err(Infeasibility::UnservedPassengers { arrived, offloaded });
    }

    Ok(())
}
