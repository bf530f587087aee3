use serde::Serialize;

use crate::{
    genome::departure_schedule::DepartureSchedule, problem::departure::Departure,
    timetable::schedule_entry::ScheduleEntry,
};

use super::{individual::Individual, statistics::SearchStatistics};

/// Outcome of a search: the best timetable found and its simulated schedule.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedTimetable {
    pub departures: Vec<Departure>,
    pub fitness: f64,
    pub schedule: Vec<ScheduleEntry>,
    pub statistics: SearchStatistics,
}

impl OptimizedTimetable {
    pub fn new(best: &Individual<DepartureSchedule>, statistics: SearchStatistics) -> Self {
        OptimizedTimetable {
            departures: best.genome.departures().to_vec(),
            fitness: best.fitness,
            schedule: best.genome.schedule(),
            statistics,
        }
    }

    pub fn is_feasible(&self) -> bool {
        crate::genome::genome::is_feasible_fitness(self.fitness)
    }

    /// Average wait in minutes, `None` when no feasible timetable was found.
    pub fn average_wait(&self) -> Option<f64> {
        self.is_feasible().then_some(self.fitness)
    }
}
