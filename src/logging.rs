//! File logging for a run

use std::fs::OpenOptions;
use std::path::Path;

pub const LOG_FILE: &str = "twenty-setup.log";

/// Log to `path`, truncated on each run, or to stderr when it can't be opened
pub fn log_target(path: &Path) -> env_logger::Target {
    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        Ok(file) => env_logger::Target::Pipe(Box::new(file)),
        Err(e) => {
            eprintln!("Could not open log file {}: {}, logging to stderr", path.display(), e);
            env_logger::Target::Stderr
        }
    }
}

pub fn init(path: &Path) {
    env_logger::Builder::from_default_env()
        .target(log_target(path))
        .init();
}
