use jiff::Timestamp;
use serde::Serialize;

use super::individual::Individual;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationStatistics {
    pub generation: usize,
    pub timestamp: Timestamp,
    /// Best feasible fitness in the generation.
    pub best_fitness: Option<f64>,
    pub mean_feasible_fitness: Option<f64>,
    pub feasible_individuals: usize,
    pub population_size: usize,
}

impl GenerationStatistics {
    pub fn from_population<G>(generation: usize, population: &[Individual<G>]) -> Self {
        let feasible = population
            .iter()
            .filter(|individual| individual.is_feasible())
            .map(|individual| individual.fitness)
            .collect::<Vec<_>>();

        let best_fitness = feasible.iter().copied().min_by(f64::total_cmp);
        let mean_feasible_fitness = if feasible.is_empty() {
            None
        } else {
            Some(feasible.iter().sum::<f64>() / feasible.len() as f64)
        };

        GenerationStatistics {
            generation,
            timestamp: Timestamp::now(),
            best_fitness,
            mean_feasible_fitness,
            feasible_individuals: feasible.len(),
            population_size: population.len(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStatistics {
    generations: Vec<GenerationStatistics>,
}

impl SearchStatistics {
    pub fn add_generation(&mut self, row: GenerationStatistics) {
        self.generations.push(row);
    }

    pub fn generations(&self) -> &[GenerationStatistics] {
        &self.generations
    }

    pub fn last_generation(&self) -> Option<&GenerationStatistics> {
        self.generations.last()
    }
}

#[cfg(test)]
mod tests {
    use crate::genome::genome::INFEASIBLE_FITNESS;

    use super::*;

    #[test]
    fn test_generation_statistics() {
        let population = [4.0, INFEASIBLE_FITNESS, 8.0]
            .into_iter()
            .map(|fitness| Individual {
                genome: (),
                fitness,
            })
            .collect::<Vec<_>>();

        let row = GenerationStatistics::from_population(3, &population);
        assert_eq!(row.generation, 3);
        assert_eq!(row.best_fitness, Some(4.0));
        assert_eq!(row.mean_feasible_fitness, Some(6.0));
        assert_eq!(row.feasible_individuals, 2);
        assert_eq!(row.population_size, 3);
    }

    #[test]
    fn test_search_statistics_keeps_generation_order() {
        let mut statistics = SearchStatistics::default();
        assert!(statistics.last_generation().is_none());

        for generation in 0..3 {
            let population = vec![Individual {
                genome: (),
                fitness: 10.0 - generation as f64,
            }];
            statistics.add_generation(GenerationStatistics::from_population(
                generation,
                &population,
            ));
        }

        assert_eq!(statistics.generations().len(), 3);
        let last = statistics.last_generation().unwrap();
        assert_eq!(last.generation, 2);
        assert_eq!(last.best_fitness, Some(8.0));
    }

    #[test]
    fn test_infeasible_generation() {
        let population = vec![Individual {
            genome: (),
            fitness: INFEASIBLE_FITNESS,
        }];

        let row = GenerationStatistics::from_population(0, &population);
        assert_eq!(row.best_fitness, None);
        assert_eq!(row.mean_feasible_fitness, None);
    }
}
