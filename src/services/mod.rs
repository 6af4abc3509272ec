// Service module exports

pub mod config;
pub mod export;
pub mod holiday;
pub mod persistence;
pub mod placement;
pub mod schedule_view;
pub mod session;
pub mod store;
pub mod timeline;
pub mod weekend;
