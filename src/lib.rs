pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod pages;
pub mod render;
pub mod router;
pub mod shell;
