mod app;
mod audio;
mod config;
mod effects;
mod logging;
mod navigate;
mod ui;

pub use app::run_app;
