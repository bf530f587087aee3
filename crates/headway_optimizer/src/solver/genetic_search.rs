use rand::{Rng, rngs::SmallRng};
use tracing::info;

use crate::{
    genome::genome::Genome,
    selector::{
        individual_selector::IndividualSelector, select_best_selector::SelectBestSelector,
        select_individual::SelectIndividual, select_random_selector::SelectRandomSelector,
        select_tournament::TournamentSelector,
    },
    timer_debug,
    utils::rng::create_rng,
};

use super::{
    evaluation::{create_evaluation_pool, evaluate_genomes},
    hall_of_fame::HallOfFame,
    individual::{Individual, sort_by_fitness},
    minimize::{MinimizeGenome, SearchOutcome, record_generation},
    solver_error::SolverError,
    solver_params::{SolverParams, SolverSelectorStrategy},
    statistics::{GenerationStatistics, SearchStatistics},
};

/// Generational genetic algorithm.
///
/// Every generation the elites survive unchanged and the rest of the population is replaced by
/// offspring: two parents are selected, cloned, recombined with probability `crossover_rate`
/// and each child is mutated with probability `mutation_rate`.
pub struct GeneticSearch {
    params: SolverParams,
}

impl GeneticSearch {
    pub fn new(params: SolverParams) -> Self {
        GeneticSearch { params }
    }

    fn create_selector(&self) -> IndividualSelector {
        match self.params.solver_selector {
            SolverSelectorStrategy::Tournament => IndividualSelector::Tournament(
                TournamentSelector::new(self.params.tournament_size),
            ),
            SolverSelectorStrategy::SelectBest => {
                IndividualSelector::SelectBest(SelectBestSelector)
            }
            SolverSelectorStrategy::SelectRandom => {
                IndividualSelector::SelectRandom(SelectRandomSelector)
            }
        }
    }

    fn breed<G: Genome>(
        &self,
        population: &[Individual<G>],
        selector: &IndividualSelector,
        rng: &mut SmallRng,
    ) -> Vec<G> {
        let offspring_count = self.params.population_size - self.elite_count(population);
        let mut offspring = Vec::with_capacity(offspring_count);

        while offspring.len() < offspring_count {
            let (Some(first), Some(second)) = (
                selector.select_individual(population, rng),
                selector.select_individual(population, rng),
            ) else {
                break;
            };

            let mut first_child = first.genome.clone();
            let mut second_child = second.genome.clone();

            if rng.random_bool(self.params.crossover_rate) {
                first_child.crossover(&second.genome);
                second_child.crossover(&first.genome);
            }

            for mut child in [first_child, second_child] {
                if offspring.len() == offspring_count {
                    break;
                }

                if rng.random_bool(self.params.mutation_rate) {
                    child.mutate(rng);
                }

                offspring.push(child);
            }
        }

        offspring
    }

    fn elite_count<G>(&self, population: &[Individual<G>]) -> usize {
        self.params.elite_count.min(population.len())
    }
}

impl MinimizeGenome for GeneticSearch {
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
        let selector = self.create_selector();
        let mut hall_of_fame = HallOfFame::new(self.params.hall_of_fame_size);
        let mut statistics = SearchStatistics::default();

        info!(
            "Running genetic search: population = {}, generations = {}, threads = {}",
            self.params.population_size,
            self.params.generations,
            pool.current_num_threads()
        );

        let initial_genomes = (0..self.params.population_size)
            .map(|_| factory(&mut rng))
            .collect::<Vec<_>>();
        let mut population = timer_debug!(
            "Initial population",
            evaluate_genomes(&pool, initial_genomes)
        )?;
        sort_by_fitness(&mut population);
        record_generation(
            0,
            &population,
            &mut hall_of_fame,
            &mut statistics,
            observer,
        );

        for generation in 1..=self.params.generations {
            let offspring = self.breed(&population, &selector, &mut rng);

            population.truncate(self.elite_count(&population));
            population.extend(evaluate_genomes(&pool, offspring)?);
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
