pub mod api;
pub mod catalog;
pub mod config;
pub mod export;
pub mod logging;
pub mod provision;
pub mod runner;
pub mod schema;
pub mod ui;
