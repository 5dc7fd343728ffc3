// Library exports for testing
pub mod app;
pub mod asset_keys;
pub mod async_tasks;
pub mod cli;
pub mod constants;
pub mod error;
pub mod persistence;
pub mod types;
pub mod ui;
