pub mod individual_selector;
pub mod select_best_selector;
pub mod select_individual;
pub mod select_random_selector;
pub mod select_tournament;
