use rand::Rng;

/// Fitness given to candidates breaking a hard constraint. Every such candidate scores the
/// same, however far from feasible it is.
pub const INFEASIBLE_FITNESS: f64 = f64::MAX;

/// A candidate solution as seen by the search engines. Lower fitness is better.
///
/// `mutate` and `crossover` work in place and take `&mut self`, so one candidate is never
/// modified from two threads. Distinct candidates may be evaluated concurrently.
pub trait Genome: Clone + Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn evaluate(&self) -> Result<f64, Self::Error>;

    fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R);

    fn crossover(&mut self, other: &Self);
}

pub fn is_feasible_fitness(fitness: f64) -> bool {
    fitness < INFEASIBLE_FITNESS
}
