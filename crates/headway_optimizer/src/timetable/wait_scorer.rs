use std::collections::VecDeque;

use crate::problem::{arrival_model::ArrivalModel, line::BOARDING_DELAY, station::Station};

use super::schedule_entry::ScheduleEntry;

/// Score of a schedule nobody boards. An average over zero passengers is undefined, so a
/// timetable serving no one is reported as causing no wait at all.
pub const EMPTY_SCHEDULE_SCORE: f64 = 0.0;

/// Passengers leaving a platform at a given minute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WaitEvent {
    pub minute: i32,
    pub boarded: u32,
}

#[derive(Debug)]
struct WaitingCohort {
    arrived_at: i32,
    remaining: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WaitSummary {
    pub total_wait: i64,
    pub boarded: u64,
}

impl WaitSummary {
    pub fn average(&self) -> f64 {
        if self.boarded == 0 {
            EMPTY_SCHEDULE_SCORE
        } else {
            self.total_wait as f64 / self.boarded as f64
        }
    }
}

/// Boarding events at `station`, ordered by minute.
pub fn wait_events(schedule: &[ScheduleEntry], station: Station) -> Vec<WaitEvent> {
    let mut events = schedule
        .iter()
        .map(|entry| {
            let call = entry.call(station);
            WaitEvent {
                minute: call.arrival_time + BOARDING_DELAY,
                boarded: call.boarding,
            }
        })
        .filter(|event| event.boarded > 0)
        .collect::<Vec<_>>();

    events.sort_by_key(|event| event.minute);
    events
}

/// Average number of minutes a passenger spends on the platform, lower is better.
pub fn score_schedule(arrivals: &ArrivalModel, schedule: &[ScheduleEntry]) -> f64 {
    summarize_waits(arrivals, schedule).average()
}

/// Replays every platform as a first-come first-served queue.
///
/// Passengers join the queue at their arrival minute. Whenever a train boards, the oldest
/// passengers leave first and each contributes the minutes they waited. Passengers no train
/// picks up are not counted.
pub fn summarize_waits(arrivals: &ArrivalModel, schedule: &[ScheduleEntry]) -> WaitSummary {
    let mut summary = WaitSummary::default();

    for station in Station::BOARDING {
        let mut queue: VecDeque<WaitingCohort> = VecDeque::new();
        let mut incoming = arrivals.timeline(station).deltas().iter().peekable();

        for event in wait_events(schedule, station) {
            while let Some(arrival) = incoming.next_if(|arrival| arrival.minute <= event.minute) {
                queue.push_back(WaitingCohort {
                    arrived_at: arrival.minute,
                    remaining: arrival.delta.max(0) as u64,
                });
            }

            let mut to_board = u64::from(event.boarded);
            while to_board > 0 {
                let Some(cohort) = queue.front_mut() else {
                    break;
                };

                let taken = cohort.remaining.min(to_board);
                summary.total_wait += (event.minute - cohort.arrived_at) as i64 * taken as i64;
                summary.boarded += taken;
                cohort.remaining -= taken;
                to_board -= taken;

                if cohort.remaining == 0 {
                    queue.pop_front();
                }
            }
        }
    }

    summary
}
