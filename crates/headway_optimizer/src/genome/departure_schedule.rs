use std::{convert::Infallible, ops::RangeInclusive, sync::Arc};

use rand::{Rng, seq::index};

use crate::{
    problem::{
        arrival_model::ArrivalModel,
        departure::{Departure, is_sorted, sort_departures},
        line::DEPARTURE_COUNT,
    },
    timetable::{
        feasibility::{Infeasibility, check_departures, check_service},
        schedule_entry::ScheduleEntry,
        simulator::simulate,
        wait_scorer::score_schedule,
    },
};

use super::{
    genome::{Genome, INFEASIBLE_FITNESS},
    seed_timetable::SEED_TIMETABLE,
};

/// Offsets, in minutes, a departure may be moved by in a single mutation.
const TIMESTAMP_SHIFT: RangeInclusive<i32> = -2..=1;

/// A full timetable: the departures of every train of the morning, always sorted by time.
#[derive(Clone, Debug)]
pub struct DepartureSchedule {
    arrivals: Arc<ArrivalModel>,
    departures: [Departure; DEPARTURE_COUNT],
}

impl DepartureSchedule {
    pub fn new(arrivals: Arc<ArrivalModel>, departures: [Departure; DEPARTURE_COUNT]) -> Self {
        let mut schedule = DepartureSchedule {
            arrivals,
            departures,
        };
        schedule.restore_order();
        schedule
    }

    pub fn seeded(arrivals: Arc<ArrivalModel>) -> Self {
        Self::new(arrivals, SEED_TIMETABLE)
    }

    pub fn departures(&self) -> &[Departure; DEPARTURE_COUNT] {
        &self.departures
    }

    pub fn arrivals(&self) -> &Arc<ArrivalModel> {
        &self.arrivals
    }

    /// Simulates the timetable without checking any constraint.
    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        simulate(&self.arrivals, &self.departures)
    }

    pub fn feasible_schedule(&self) -> Result<Vec<ScheduleEntry>, Infeasibility> {
        check_departures(&self.departures)?;

        let schedule = self.schedule();
        check_service(&self.arrivals, &schedule)?;

        Ok(schedule)
    }

    pub fn swap_train_types(&mut self, first: usize, second: usize) {
        let first_type = self.departures[first].train_type;
        self.departures[first].train_type = self.departures[second].train_type;
        self.departures[second].train_type = first_type;

        self.restore_order();
    }

    /// Moves every departure by a random offset in [`TIMESTAMP_SHIFT`].
    pub fn shift_timestamps<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for departure in self.departures.iter_mut() {
            departure.timestamp += rng.random_range(TIMESTAMP_SHIFT);
        }

        self.restore_order();
    }

    fn restore_order(&mut self) {
        sort_departures(&mut self.departures);
        debug_assert!(is_sorted(&self.departures));
    }
}

impl Genome for DepartureSchedule {
    type Error = Infallible;

    fn evaluate(&self) -> Result<f64, Self::Error> {
        debug_assert!(
            is_sorted(&self.departures),
            "departures must stay sorted between operations"
        );

        match self.feasible_schedule() {
            Ok(schedule) => Ok(score_schedule(&self.arrivals, &schedule)),
            Err(_) => Ok(INFEASIBLE_FITNESS),
        }
    }

    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if rng.random_bool(0.5) {
            let picked = index::sample(rng, DEPARTURE_COUNT, 2);
            self.swap_train_types(picked.index(0), picked.index(1));
        } else {
            self.shift_timestamps(rng);
        }
    }

    /// Moves every departure halfway towards the departure at the same position in `other`.
    /// Train types are kept.
    fn crossover(&mut self, other: &Self) {
        for (departure, other_departure) in self.departures.iter_mut().zip(other.departures.iter())
        {
            departure.timestamp = (departure.timestamp + other_departure.timestamp) / 2;
        }

        self.restore_order();
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{
        problem::{station::Station, train_type::TrainType},
        test_utils,
    };

    use super::*;

    fn light_schedule() -> DepartureSchedule {
        test_utils::create_seeded_schedule(test_utils::create_light_arrivals())
    }

    #[test]
    fn test_seed_schedule_evaluates() {
        let genome = light_schedule();
        let fitness = genome.evaluate().unwrap();

        assert!(fitness < INFEASIBLE_FITNESS);
        assert!(fitness >= 3.0);
    }

    #[test]
    fn test_negative_start_is_infeasible() {
        let mut departures = SEED_TIMETABLE;
        departures[0].timestamp = -1;
        let genome = DepartureSchedule::new(Arc::new(ArrivalModel::default()), departures);

        assert_eq!(genome.evaluate().unwrap(), INFEASIBLE_FITNESS);
    }

    #[test]
    fn test_short_headway_is_infeasible() {
        let mut departures = SEED_TIMETABLE;
        departures[2].timestamp = 12;
        let genome = DepartureSchedule::new(Arc::new(ArrivalModel::default()), departures);

        assert_eq!(
            genome.feasible_schedule(),
            Err(Infeasibility::HeadwayTooShort {
                train_number: 3,
                gap: 2
            })
        );
        assert_eq!(genome.evaluate().unwrap(), INFEASIBLE_FITNESS);
    }

    #[test]
    fn test_overcrowded_line_is_infeasible() {
        // Far more passengers than the 5600 seats of the seed timetable.
        let arrivals = test_utils::create_arrival_model(&[(Station::A, 0, 10_000)]);
        let genome = DepartureSchedule::seeded(Arc::new(arrivals));

        assert!(matches!(
            genome.feasible_schedule(),
            Err(Infeasibility::UnservedPassengers {
                arrived: 10_000,
                ..
            })
        ));
        assert_eq!(genome.evaluate().unwrap(), INFEASIBLE_FITNESS);
    }

    #[test]
    fn test_late_passengers_are_infeasible() {
        let arrivals = test_utils::create_arrival_model(&[(Station::A, 190, 1)]);
        let genome = DepartureSchedule::seeded(Arc::new(arrivals));

        assert_eq!(genome.evaluate().unwrap(), INFEASIBLE_FITNESS);
    }

    #[test]
    fn test_mutation_keeps_departures_sorted() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut genome = light_schedule();

        for _ in 0..500 {
            genome.mutate(&mut rng);
            assert!(is_sorted(genome.departures()));
        }
    }

    #[test]
    fn test_swap_mutation_keeps_timestamps() {
        // A zero draw always takes the train type swap branch.
        let mut rng = test_utils::MockRng::new(vec![0]);
        let mut genome = light_schedule();
        genome.mutate(&mut rng);

        let timestamps = genome
            .departures()
            .iter()
            .map(|departure| departure.timestamp)
            .collect::<Vec<_>>();
        let seed_timestamps = SEED_TIMETABLE
            .iter()
            .map(|departure| departure.timestamp)
            .collect::<Vec<_>>();
        let large_trains = |departures: &[Departure]| {
            departures
                .iter()
                .filter(|departure| departure.train_type == TrainType::Large)
                .count()
        };

        assert_eq!(timestamps, seed_timestamps);
        assert_eq!(
            large_trains(genome.departures()),
            large_trains(&SEED_TIMETABLE)
        );
    }

    #[test]
    fn test_swap_train_types() {
        let mut genome = light_schedule();
        genome.swap_train_types(0, 1);

        assert_eq!(genome.departures()[0].train_type, TrainType::Large);
        assert_eq!(genome.departures()[1].train_type, TrainType::Small);
        assert_eq!(genome.departures()[0].timestamp, 0);
    }

    #[test]
    fn test_shift_timestamps_moves_every_departure_a_little() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut genome = light_schedule();
        genome.shift_timestamps(&mut rng);

        for (departure, seed) in genome.departures().iter().zip(SEED_TIMETABLE.iter()) {
            assert!(TIMESTAMP_SHIFT.contains(&(departure.timestamp - seed.timestamp)));
            assert_eq!(departure.train_type, seed.train_type);
        }
    }

    #[test]
    fn test_self_crossover_is_identity() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut genome = light_schedule();
        genome.mutate(&mut rng);
        genome.mutate(&mut rng);

        let before = *genome.departures();
        let clone = genome.clone();
        genome.crossover(&clone);

        assert_eq!(genome.departures(), &before);
    }

    #[test]
    fn test_crossover_averages_timestamps() {
        let arrivals = Arc::new(ArrivalModel::default());
        let mut genome = DepartureSchedule::seeded(Arc::clone(&arrivals));
        let mut later = SEED_TIMETABLE;
        for departure in later.iter_mut() {
            departure.timestamp += 3;
            departure.train_type = TrainType::Small;
        }
        let other = DepartureSchedule::new(arrivals, later);

        genome.crossover(&other);

        for (departure, seed) in genome.departures().iter().zip(SEED_TIMETABLE.iter()) {
            assert_eq!(departure.timestamp, (2 * seed.timestamp + 3) / 2);
            assert_eq!(departure.train_type, seed.train_type);
        }
    }

    #[test]
    fn test_clone_shares_arrivals() {
        let genome = light_schedule();
        let mut clone = genome.clone();
        clone.swap_train_types(0, 1);

        assert!(Arc::ptr_eq(genome.arrivals(), clone.arrivals()));
        assert_ne!(genome.departures(), clone.departures());
    }
}
