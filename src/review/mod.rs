pub mod schedule;
pub mod tracker;
