pub mod departure_schedule;
pub mod genome;
pub mod seed_timetable;
