pub mod api;
pub mod cli;
pub mod config;
pub mod data_paths;
pub mod display;
pub mod export;
pub mod logging;
pub mod search;
pub mod state;
