use rand::rngs::SmallRng;
use tracing::debug;

use crate::genome::genome::Genome;

use super::{
    hall_of_fame::HallOfFame,
    individual::Individual,
    solver_error::SolverError,
    statistics::{GenerationStatistics, SearchStatistics},
};

pub struct SearchOutcome<G> {
    pub hall_of_fame: HallOfFame<G>,
    pub statistics: SearchStatistics,
}

/// A search engine looking for the genome with the lowest fitness.
///
/// `factory` creates the genomes the search starts from, `observer` is called once per
/// generation.
pub trait MinimizeGenome {
    fn minimize<G, F>(
        &self,
        factory: F,
        observer: &mut dyn FnMut(&GenerationStatistics),
    ) -> Result<SearchOutcome<G>, SolverError>
    where
        G: Genome,
        F: Fn(&mut SmallRng) -> G;
}

/// `population` must be sorted by fitness.
pub(crate) fn record_generation<G: Genome>(
    generation: usize,
    population: &[Individual<G>],
    hall_of_fame: &mut HallOfFame<G>,
    statistics: &mut SearchStatistics,
    observer: &mut dyn FnMut(&GenerationStatistics),
) {
    hall_of_fame.consider_all(population);

    let row = GenerationStatistics::from_population(generation, population);
    debug!(
        generation,
        feasible = row.feasible_individuals,
        best = ?row.best_fitness,
        hall_of_fame_best = ?hall_of_fame.best().map(|best| best.fitness),
        "Generation done"
    );

    observer(&row);
    statistics.add_generation(row);
}
