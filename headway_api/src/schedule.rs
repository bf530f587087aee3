pub mod post_schedule;
