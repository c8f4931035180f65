//! Platform logging initialization for jobhub_app.
//!
//! The terminal belongs to the UI while the app runs, so logs go to
//! `./jobhub.log` in the current working directory.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub(crate) const LOG_FILENAME: &str = "./jobhub.log";

/// Initialize the file logger. Without a writable log file, logging stays off.
pub(crate) fn initialize(path: &Path, level: LevelFilter) {
    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
