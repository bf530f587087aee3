mod evaluation;
pub mod genetic_search;
pub mod hall_of_fame;
pub mod individual;
pub mod minimize;
pub mod optimized_timetable;
pub mod random_search;
pub mod search_strategy;
pub mod solver;
pub mod solver_error;
pub mod solver_params;
pub mod statistics;
