use std::fs::File;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::model::config::LogConfig;

/// Parse a level name, falling back to `Info` for anything unrecognised
pub fn level_filter(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

/// Send log output to the configured file. The terminal belongs to the TUI,
/// so failures here leave logging off instead of aborting.
pub fn init_logging(config: &LogConfig) {
    let level = level_filter(&config.level);
    if level == LevelFilter::Off {
        return;
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
