pub mod arrival_model;
pub mod clock;
pub mod departure;
pub mod line;
pub mod station;
pub mod timeline;
pub mod train_type;
