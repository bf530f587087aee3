use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};

use crate::genome::genome::Genome;

use super::{individual::Individual, solver_error::SolverError, solver_params::Threads};

pub(crate) fn create_evaluation_pool(threads: &Threads) -> Result<ThreadPool, SolverError> {
    Ok(ThreadPoolBuilder::new()
        .num_threads(threads.number_of_threads())
        .build()?)
}

/// Evaluates the genomes in parallel. Each genome is owned by exactly one task.
pub(crate) fn evaluate_genomes<G: Genome>(
    pool: &ThreadPool,
    genomes: Vec<G>,
) -> Result<Vec<Individual<G>>, SolverError> {
    pool.install(|| {
        genomes
            .into_par_iter()
            .map(|genome| {
                let fitness = genome
                    .evaluate()
                    .map_err(|error| SolverError::Evaluation(Box::new(error)))?;
                Ok(Individual { genome, fitness })
            })
            .collect()
    })
}
