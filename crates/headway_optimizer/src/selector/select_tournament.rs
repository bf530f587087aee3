use rand::seq::IteratorRandom;

use crate::solver::individual::Individual;

use super::select_individual::SelectIndividual;

/// Draws `contestants` distinct individuals and keeps the fittest.
pub struct TournamentSelector {
    contestants: usize,
}

impl TournamentSelector {
    pub fn new(contestants: usize) -> Self {
        TournamentSelector {
            contestants: contestants.max(1),
        }
    }
}

impl SelectIndividual for TournamentSelector {
    fn select_individual<'a, G>(
        &self,
        individuals: &'a [Individual<G>],
        rng: &mut impl rand::Rng,
    ) -> Option<&'a Individual<G>> {
        if individuals.len() <= 1 {
            return individuals.first();
        }

        individuals
            .iter()
            .choose_multiple(rng, self.contestants)
            .into_iter()
            .min_by(|first, second| first.fitness.total_cmp(&second.fitness))
    }
}
