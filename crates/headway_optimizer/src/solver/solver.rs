use std::sync::Arc;

use jiff::Timestamp;
use parking_lot::{Mutex, RwLock};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    genome::seed_timetable::departure_schedule_factory, problem::arrival_model::ArrivalModel,
    timer_debug,
};

use super::{
    minimize::MinimizeGenome, optimized_timetable::OptimizedTimetable,
    search_strategy::SearchStrategy, solver_error::SolverError, solver_params::SolverParams,
    statistics::GenerationStatistics,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
}

type GenerationHandler = Arc<Mutex<dyn FnMut(&GenerationStatistics) + Send + Sync + 'static>>;

/// Optimizes the timetable of one morning of arrivals.
pub struct Solver {
    arrivals: Arc<ArrivalModel>,
    params: SolverParams,
    status: RwLock<SolverStatus>,
    created_at: Timestamp,
    on_generation_handler: Option<GenerationHandler>,
}

impl Solver {
    pub fn new(arrivals: ArrivalModel, params: SolverParams) -> Self {
        Solver {
            arrivals: Arc::new(arrivals),
            params,
            status: RwLock::new(SolverStatus::Pending),
            created_at: Timestamp::now(),
            on_generation_handler: None,
        }
    }

    pub fn on_generation<F>(&mut self, callback: F)
    where
        F: FnMut(&GenerationStatistics) + Send + Sync + 'static,
    {
        self.on_generation_handler = Some(Arc::new(Mutex::new(callback)));
    }

    pub fn solve(&self) -> Result<OptimizedTimetable, SolverError> {
        *self.status.write() = SolverStatus::Running;
        info!(
            "Optimizing timetable for {} passengers",
            self.arrivals.total_passengers()
        );

        let search = SearchStrategy::from_params(&self.params);
        let factory = departure_schedule_factory(Arc::clone(&self.arrivals));
        let mut observer = |row: &GenerationStatistics| {
            if let Some(handler) = &self.on_generation_handler {
                let mut handler = handler.lock();
                (*handler)(row);
            }
        };

        let outcome = timer_debug!("Search", search.minimize(factory, &mut observer));
        *self.status.write() = SolverStatus::Completed;

        let outcome = outcome?;
        let best = outcome
            .hall_of_fame
            .best()
            .ok_or(SolverError::EmptyHallOfFame)?;

        if let Some(last) = outcome.statistics.last_generation() {
            debug!(
                "Search finished after generation {}, {} feasible of {}",
                last.generation, last.feasible_individuals, last.population_size
            );
        }

        let timetable = OptimizedTimetable::new(best, outcome.statistics.clone());
        match timetable.average_wait() {
            Some(average_wait) => info!("Best timetable: average wait = {average_wait:.3} min"),
            None => warn!("No feasible timetable found, returning the least bad candidate"),
        }

        Ok(timetable)
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn arrivals(&self) -> &ArrivalModel {
        &self.arrivals
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{
        problem::{line::DEPARTURE_COUNT, station::Station},
        solver::solver_params::{SearchStrategyKind, Threads},
        test_utils,
    };

    use super::*;

    fn params(search_strategy: SearchStrategyKind) -> SolverParams {
        SolverParams {
            search_strategy,
            generations: 4,
            population_size: 10,
            evaluation_threads: Threads::Multi(2),
            seed: Some(17),
            ..SolverParams::default()
        }
    }

    #[test]
    fn test_solve() {
        let mut solver = Solver::new(
            test_utils::create_light_arrivals(),
            params(SearchStrategyKind::Genetic),
        );
        let generations = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&generations);
        solver.on_generation(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(solver.status(), SolverStatus::Pending);
        assert!(solver.created_at() <= Timestamp::now());
        let timetable = solver.solve().unwrap();

        assert_eq!(solver.status(), SolverStatus::Completed);
        assert_eq!(generations.load(Ordering::Relaxed), 5);
        assert!(timetable.is_feasible());
        assert_eq!(timetable.departures.len(), DEPARTURE_COUNT);
        assert_eq!(timetable.schedule.len(), DEPARTURE_COUNT);

        let offloaded: u32 = timetable
            .schedule
            .iter()
            .map(|entry| entry.terminus.offloading)
            .sum();
        assert_eq!(u64::from(offloaded), solver.arrivals().total_passengers());
    }

    #[test]
    fn test_solve_with_random_search() {
        let solver = Solver::new(
            test_utils::create_light_arrivals(),
            params(SearchStrategyKind::Random),
        );

        let timetable = solver.solve().unwrap();
        assert_eq!(timetable.statistics.generations().len(), 5);
    }

    #[test]
    fn test_overcrowded_morning_has_no_feasible_timetable() {
        let solver = Solver::new(
            test_utils::create_arrival_model(&[(Station::A, 0, 50_000)]),
            params(SearchStrategyKind::Genetic),
        );

        let timetable = solver.solve().unwrap();
        assert!(!timetable.is_feasible());
        assert_eq!(timetable.average_wait(), None);
    }
}
