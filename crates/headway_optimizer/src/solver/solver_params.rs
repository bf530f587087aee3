use super::solver_error::SolverError;

#[derive(Clone, Debug)]
pub struct SolverParams {
    pub search_strategy: SearchStrategyKind,
    pub solver_selector: SolverSelectorStrategy,

    pub generations: usize,
    pub population_size: usize,
    pub tournament_size: usize,

    pub crossover_rate: f64,
    pub mutation_rate: f64,

    /// Best individuals copied unchanged into the next generation.
    pub elite_count: usize,
    pub hall_of_fame_size: usize,

    pub evaluation_threads: Threads,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => *num,
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStrategyKind {
    Genetic,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverSelectorStrategy {
    Tournament,
    SelectBest,
    SelectRandom,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            search_strategy: SearchStrategyKind::Genetic,
            solver_selector: SolverSelectorStrategy::Tournament,
            generations: 10,
            population_size: 30,
            tournament_size: 3,
            crossover_rate: 0.7,
            mutation_rate: 0.5,
            elite_count: 1,
            hall_of_fame_size: 1,
            evaluation_threads: Threads::Auto,
            seed: None,
        }
    }
}

impl SolverParams {
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.population_size < 2 {
            return Err(SolverError::InvalidParams(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.hall_of_fame_size == 0 {
            return Err(SolverError::InvalidParams(String::from(
                "hall of fame must keep at least one individual",
            )));
        }

        if self.elite_count >= self.population_size {
            return Err(SolverError::InvalidParams(format!(
                "elite count {} leaves no room for offspring in a population of {}",
                self.elite_count, self.population_size
            )));
        }

        for (name, rate) in [
            ("crossover rate", self.crossover_rate),
            ("mutation rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SolverError::InvalidParams(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }

        if self.evaluation_threads.number_of_threads() == 0 {
            return Err(SolverError::InvalidParams(String::from(
                "at least one evaluation thread is required",
            )));
        }

        Ok(())
    }
}
