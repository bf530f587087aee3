use crate::solver::individual::Individual;

use super::{
    select_best_selector::SelectBestSelector, select_individual::SelectIndividual,
    select_random_selector::SelectRandomSelector, select_tournament::TournamentSelector,
};

pub enum IndividualSelector {
    SelectBest(SelectBestSelector),
    SelectRandom(SelectRandomSelector),
    Tournament(TournamentSelector),
}

impl SelectIndividual for IndividualSelector {
    fn select_individual<'a, G>(
        &self,
        individuals: &'a [Individual<G>],
        rng: &mut impl rand::Rng,
    ) -> Option<&'a Individual<G>> {
        match self {
            IndividualSelector::SelectBest(selector) => {
                selector.select_individual(individuals, rng)
            }
            IndividualSelector::SelectRandom(selector) => {
                selector.select_individual(individuals, rng)
            }
            IndividualSelector::Tournament(selector) => {
                selector.select_individual(individuals, rng)
            }
        }
    }
}
