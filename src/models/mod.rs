// Module exports for models

pub mod activity;
pub mod day;
pub mod holiday;
pub mod schedule;
pub mod settings;
pub mod state;
