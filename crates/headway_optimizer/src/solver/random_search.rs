use rand::rngs::SmallRng;
use tracing::info;

use crate::{genome::genome::Genome, utils::rng::create_rng};

use super::{
    evaluation::{create_evaluation_pool, evaluate_genomes},
    hall_of_fame::HallOfFame,
    individual::sort_by_fitness,
    minimize::{MinimizeGenome, SearchOutcome, record_generation},
    solver_error::SolverError,
    solver_params::SolverParams,
    statistics::{GenerationStatistics, SearchStatistics},
};

/// Samples independent mutations of factory genomes. Spends the same evaluation budget as the
/// genetic search without any selection pressure.
pub struct RandomSearch {
    params: SolverParams,
}

impl RandomSearch {
    pub fn new(params: SolverParams) -> Self {
        RandomSearch { params }
    }
}

impl MinimizeGenome for RandomSearch {
    fn minimize<G, F>(
        &self,
        factory: F,
        observer: &mut dyn FnMut(&GenerationStatistics),
    ) -> Result<SearchOutcome<G>, SolverError>
    where
        G: Genome,
        F: Fn(&mut SmallRng) -> G,
    {
        self.params.validate()?;

        let pool = create_evaluation_pool(&self.params.evaluation_threads)?;
        let mut rng = create_rng(self.params.seed);
        let mut hall_of_fame = HallOfFame::new(self.params.hall_of_fame_size);
        let mut statistics = SearchStatistics::default();

        info!(
            "Running random search: samples = {}",
            self.params.population_size * (self.params.generations + 1)
        );

        for generation in 0..=self.params.generations {
            let genomes = (0..self.params.population_size)
                .map(|_| {
                    let mut genome = factory(&mut rng);
                    genome.mutate(&mut rng);
                    genome
                })
                .collect::<Vec<_>>();

            let mut population = evaluate_genomes(&pool, genomes)?;
            sort_by_fitness(&mut population);
            record_generation(
                generation,
                &population,
                &mut hall_of_fame,
                &mut statistics,
                observer,
            );
        }

        Ok(SearchOutcome {
            hall_of_fame,
            statistics,
        })
    }
}
