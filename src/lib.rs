// Weekendly Library
// Exports the planner core for the binary, tests and benches

pub mod models;
pub mod services;
pub mod utils;
