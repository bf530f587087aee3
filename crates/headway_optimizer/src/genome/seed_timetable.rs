use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rand::rngs::SmallRng;

use crate::problem::{
    arrival_model::ArrivalModel,
    departure::Departure,
    line::DEPARTURE_COUNT,
    train_type::TrainType::{Large, Small},
};

use super::departure_schedule::DepartureSchedule;

/// Starting point of every search: short trains at the edges of the morning, long trains
/// through the peak.
pub const SEED_TIMETABLE: [Departure; DEPARTURE_COUNT] = [
    Departure::new(Small, 0),
    Departure::new(Large, 10),
    Departure::new(Large, 15),
    Departure::new(Large, 20),
    Departure::new(Large, 30),
    Departure::new(Large, 40),
    Departure::new(Large, 50),
    Departure::new(Large, 60),
    Departure::new(Large, 70),
    Departure::new(Large, 80),
    Departure::new(Large, 90),
    Departure::new(Large, 105),
    Departure::new(Large, 130),
    Departure::new(Small, 150),
    Departure::new(Small, 160),
    Departure::new(Small, 180),
];

/// Creates the genomes of an initial population.
///
/// The first genome is the seed timetable itself, the following ones have every departure
/// nudged by a few minutes.
pub fn departure_schedule_factory(
    arrivals: Arc<ArrivalModel>,
) -> impl Fn(&mut SmallRng) -> DepartureSchedule + Send + Sync {
    let seed_issued = AtomicBool::new(false);

    move |rng| {
        let mut genome = DepartureSchedule::seeded(Arc::clone(&arrivals));
        if seed_issued.swap(true, Ordering::Relaxed) {
            genome.shift_timestamps(rng);
        }

        genome
    }
}
