pub mod feasibility;
pub mod schedule_csv;
pub mod schedule_entry;
pub mod simulator;
pub mod wait_scorer;
