use crate::solver::individual::Individual;

use super::select_individual::SelectIndividual;

pub struct SelectBestSelector;

impl SelectIndividual for SelectBestSelector {
    fn select_individual<'a, G>(
        &self,
        individuals: &'a [Individual<G>],
        _: &mut impl rand::Rng,
    ) -> Option<&'a Individual<G>> {
        // Assumption that it's sorted
        individuals.first()
    }
}
