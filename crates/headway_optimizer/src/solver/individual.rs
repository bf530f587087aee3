use crate::genome::genome::is_feasible_fitness;

/// An evaluated genome.
#[derive(Clone, Debug)]
pub struct Individual<G> {
    pub genome: G,
    pub fitness: f64,
}

impl<G> Individual<G> {
    pub fn is_feasible(&self) -> bool {
        is_feasible_fitness(self.fitness)
    }
}

pub fn sort_by_fitness<G>(individuals: &mut [Individual<G>]) {
    individuals.sort_by(|first, second| first.fitness.total_cmp(&second.fitness));
}
