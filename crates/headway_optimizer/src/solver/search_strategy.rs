use rand::rngs::SmallRng;

use crate::genome::genome::Genome;

use super::{
    genetic_search::GeneticSearch,
    minimize::{MinimizeGenome, SearchOutcome},
    random_search::RandomSearch,
    solver_error::SolverError,
    solver_params::{SearchStrategyKind, SolverParams},
    statistics::GenerationStatistics,
};

pub enum SearchStrategy {
    Genetic(GeneticSearch),
    Random(RandomSearch),
}

impl SearchStrategy {
    pub fn from_params(params: &SolverParams) -> Self {
        match params.search_strategy {
            SearchStrategyKind::Genetic => {
                SearchStrategy::Genetic(GeneticSearch::new(params.clone()))
            }
            SearchStrategyKind::Random => {
                SearchStrategy::Random(RandomSearch::new(params.clone()))
            }
        }
    }
}

impl MinimizeGenome for SearchStrategy {
    fn minimize<G, F>(
        &self,
        factory: F,
        observer: &mut dyn FnMut(&GenerationStatistics),
    ) -> Result<SearchOutcome<G>, SolverError>
    where
        G: Genome,
        F: Fn(&mut SmallRng) -> G,
    {
        match self {
            SearchStrategy::Genetic(search) => search.minimize(factory, observer),
            SearchStrategy::Random(search) => search.minimize(factory, observer),
        }
    }
}
