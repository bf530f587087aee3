pub mod genome;
pub mod json;
pub mod parsers;
pub mod problem;
mod selector;
pub mod solver;
pub mod timetable;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
