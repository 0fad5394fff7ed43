pub mod app;
pub mod config;
pub mod lookup;
pub mod query;
pub mod search;
pub mod ui;
