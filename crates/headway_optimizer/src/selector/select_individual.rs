use crate::solver::individual::Individual;

pub trait SelectIndividual {
    fn select_individual<'r, G>(
        &self,
        individuals: &'r [Individual<G>],
        rng: &mut impl rand::Rng,
    ) -> Option<&'r Individual<G>>;
}
