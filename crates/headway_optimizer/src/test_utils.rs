use std::sync::Arc;

use rand::RngCore;

use crate::{
    genome::{departure_schedule::DepartureSchedule, seed_timetable::SEED_TIMETABLE},
    problem::{
        arrival_model::{ArrivalModel, ArrivalSample},
        departure::Departure,
        station::Station,
        train_type::TrainType,
    },
};

pub fn create_arrival_model(samples: &[(Station, i32, u32)]) -> ArrivalModel {
    ArrivalModel::new(
        samples
            .iter()
            .map(|&(station, minute, count)| ArrivalSample::new(station, minute, count))
            .collect(),
    )
}

/// Passengers every five minutes at every station, busier between 7:30 and 8:30.
pub fn create_rush_hour_arrivals() -> ArrivalModel {
    let mut samples = Vec::new();
    for minute in (0..=170).step_by(5) {
        let peak = if (30..=90).contains(&minute) { 20 } else { 0 };
        samples.push(ArrivalSample::new(Station::A, minute, 30 + peak));
        samples.push(ArrivalSample::new(Station::B, minute, 15 + peak / 2));
        samples.push(ArrivalSample::new(Station::C, minute, 10));
    }

    ArrivalModel::new(samples)
}

/// A handful of passengers every train of the seed timetable can pick up.
pub fn create_light_arrivals() -> ArrivalModel {
    create_arrival_model(&[
        (Station::A, 0, 40),
        (Station::A, 25, 80),
        (Station::B, 30, 25),
        (Station::A, 60, 120),
        (Station::C, 90, 60),
        (Station::B, 120, 50),
        (Station::A, 150, 30),
    ])
}

pub fn seed_departures() -> Vec<Departure> {
    SEED_TIMETABLE.to_vec()
}

/// Large trains leaving at the given minutes.
pub fn create_departures(timestamps: &[i32]) -> Vec<Departure> {
    timestamps
        .iter()
        .map(|&timestamp| Departure::new(TrainType::Large, timestamp))
        .collect()
}

pub fn create_seeded_schedule(arrivals: ArrivalModel) -> DepartureSchedule {
    DepartureSchedule::seeded(Arc::new(arrivals))
}

/// Replays `data` forever, handy to force a branch of a randomized operator.
pub struct MockRng {
    data: Vec<u64>,
    index: usize,
}

impl MockRng {
    pub fn new(data: Vec<u64>) -> Self {
        MockRng { data, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.data[self.index % self.data.len()];
        self.index = (self.index + 1) % self.data.len();
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_mock_rng_cycles() {
        let mut rng = MockRng::new(vec![1, 2, 3]);

        let values = (0..6).map(|_| rng.next_u64()).collect::<Vec<_>>();
        assert_eq!(values, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_mock_rng_random_bool() {
        let mut rng = MockRng::new(vec![0, u64::MAX]);

        assert!(rng.random_bool(0.5));
        assert!(!rng.random_bool(0.5));
    }
}
