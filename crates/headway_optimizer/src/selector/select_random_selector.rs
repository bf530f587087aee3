use rand::seq::IndexedRandom;

use crate::solver::individual::Individual;

use super::select_individual::SelectIndividual;

pub struct SelectRandomSelector;

impl SelectIndividual for SelectRandomSelector {
    fn select_individual<'a, G>(
        &self,
        individuals: &'a [Individual<G>],
        rng: &mut impl rand::Rng,
    ) -> Option<&'a Individual<G>> {
        individuals.choose(rng)
    }
}
