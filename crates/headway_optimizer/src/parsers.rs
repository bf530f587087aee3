pub mod arrivals_csv;
pub mod parser;
