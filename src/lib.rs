pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod shutdown;
pub mod ui;
