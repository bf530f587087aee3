use super::individual::Individual;

/// The best individuals met during a search, sorted by fitness.
pub struct HallOfFame<G> {
    size: usize,
    individuals: Vec<Individual<G>>,
}

impl<G: Clone> HallOfFame<G> {
    pub fn new(size: usize) -> Self {
        HallOfFame {
            size,
            individuals: Vec::with_capacity(size),
        }
    }

    pub fn best(&self) -> Option<&Individual<G>> {
        self.individuals.first()
    }

    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Keeps a copy of `individual` if it ranks among the best seen so far. Returns whether it
    /// was kept.
    pub fn consider(&mut self, individual: &Individual<G>) -> bool {
        // Equal fitness is treated as the same timetable, it would only crowd out variety.
        let is_duplicate = self
            .individuals
            .iter()
            .any(|kept| kept.fitness.total_cmp(&individual.fitness).is_eq());
        if is_duplicate {
            return false;
        }

        if self.individuals.len() == self.size {
            match self.individuals.last() {
                Some(worst) if worst.fitness.total_cmp(&individual.fitness).is_le() => {
                    return false;
                }
                _ => {
                    self.individuals.pop();
                }
            }
        }

        match self
            .individuals
            .binary_search_by(|kept| kept.fitness.total_cmp(&individual.fitness))
        {
            Ok(pos) | Err(pos) => {
                self.individuals.insert(pos, individual.clone());
            }
        }

        true
    }

    pub fn consider_all(&mut self, individuals: &[Individual<G>]) {
        for individual in individuals {
            self.consider(individual);
        }
    }
}
